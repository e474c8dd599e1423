use super::{NodeId, NodePool};

/// Serialize a node subtree as SVG text.
///
/// Elements without children or text self-close. Attribute order is
/// insertion order, which the renderer keeps deterministic.
pub fn write_svg(pool: &NodePool, id: NodeId) -> String {
    let mut out = String::new();
    write_node(pool, id, &mut out);
    out
}

fn write_node(pool: &NodePool, id: NodeId, out: &mut String) {
    let node = pool.node(id);

    out.push('<');
    out.push_str(node.kind());
    for (name, value) in node.attributes() {
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        out.push_str(&escape_attribute(value));
        out.push('"');
    }

    let children = node.children();
    if children.is_empty() && node.text().is_none() {
        out.push_str("/>");
        return;
    }

    out.push('>');
    if let Some(text) = node.text() {
        out.push_str(&escape_text(text));
    }
    for &child in children {
        write_node(pool, child, out);
    }
    out.push_str("</");
    out.push_str(node.kind());
    out.push('>');
}

fn escape_text(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn escape_attribute(value: &str) -> String {
    escape_text(value).replace('"', "&quot;")
}
