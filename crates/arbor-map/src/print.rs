//! Diagnostic line rendering and the line-sink boundary.

use std::fmt::Display;

use crate::arena::Arena;
use crate::types::KvNode;

/// Receives diagnostic lines from [`TreeMap::print`].
///
/// The surrounding logging facility implements this at the boundary; the
/// blanket impl lets plain closures act as sinks.
///
/// [`TreeMap::print`]: crate::map::TreeMap::print
pub trait LineSink {
    fn line(&mut self, text: &str);
}

impl<F: FnMut(&str)> LineSink for F {
    fn line(&mut self, text: &str) {
        self(text);
    }
}

/// One node as a line: own key plus parent/left/right keys, `-` for
/// absent links.
pub(crate) fn node_line<K, V, N>(arena: &Arena<N>, node: &N) -> String
where
    K: Display,
    N: KvNode<K, V>,
{
    let at = |idx: Option<u32>| match idx {
        Some(i) => arena.node(i).key().to_string(),
        None => "-".to_string(),
    };
    format!(
        "key={} parent={} left={} right={}",
        node.key(),
        at(node.p()),
        at(node.l()),
        at(node.r())
    )
}
