use std::fmt::Debug;

use crate::node::Node;

/// Renders one child line given the indentation for its own children.
pub type PrintChild<'a> = dyn Fn(&str) -> String + 'a;

/// Lays out `children` below the current line using box-drawing branches.
/// Trailing `None` children are skipped.
pub fn print_tree(tab: &str, children: &[Option<&PrintChild<'_>>]) -> String {
    let mut out = String::new();
    let Some(last) = children.iter().rposition(Option::is_some) else {
        return out;
    };

    for (i, child_opt) in children.iter().enumerate().take(last + 1) {
        let Some(child_fn) = *child_opt else {
            continue;
        };

        let is_last = i == last;
        let child_tab = format!("{tab}{}  ", if is_last { " " } else { "│" });
        let child = child_fn(&child_tab);
        let branch = if child.is_empty() {
            "│"
        } else if is_last {
            "└─"
        } else {
            "├─"
        };

        out.push('\n');
        out.push_str(tab);
        out.push_str(branch);
        if !child.is_empty() {
            out.push(' ');
            out.push_str(&child);
        }
    }

    out
}

/// Debug dump of a subtree: value and cached height per node, `∅` for an
/// absent child.
pub fn print<T: Debug>(node: Option<&Node<T>>, tab: &str) -> String {
    let Some(n) = node else {
        return "∅".to_string();
    };
    let head = format!("{:?} [h={}]", n.value, n.height);
    if n.left.is_none() && n.right.is_none() {
        return head;
    }

    let left: &PrintChild<'_> = &|tab: &str| format!("L {}", print(n.left(), tab));
    let right: &PrintChild<'_> = &|tab: &str| format!("R {}", print(n.right(), tab));
    head + &print_tree(tab, &[Some(left), Some(right)])
}
