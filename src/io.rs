//! Plain-text hierarchy input and tree rendering.

use anyhow::{anyhow, Context, Result};

use crate::hierarchy::{ArrayHierarchy, Depth, Hierarchy, NodeId};

/// Parse one entry per line: `id depth` or `id:depth`.
///
/// Blank lines and `#` comments are skipped.
pub fn parse_hierarchy(text: &str) -> Result<ArrayHierarchy> {
    let mut node_ids = Vec::new();
    let mut depths = Vec::new();

    for (line_no, raw) in text.lines().enumerate() {
        let line = raw.split('#').next().unwrap_or_default().trim();
        if line.is_empty() {
            continue;
        }
        let (id_str, depth_str) = split_entry(line)
            .ok_or_else(|| anyhow!("expected `id depth` on line {}", line_no + 1))?;
        let id: NodeId = id_str
            .parse()
            .with_context(|| format!("invalid node id '{}' on line {}", id_str, line_no + 1))?;
        let depth: Depth = depth_str
            .parse()
            .with_context(|| format!("invalid depth '{}' on line {}", depth_str, line_no + 1))?;
        node_ids.push(id);
        depths.push(depth);
    }

    Ok(ArrayHierarchy::new(node_ids, depths)?)
}

fn split_entry(line: &str) -> Option<(&str, &str)> {
    if let Some((id, depth)) = line.split_once(':') {
        return Some((id.trim(), depth.trim()));
    }
    let mut fields = line.split_whitespace();
    let id = fields.next()?;
    let depth = fields.next()?;
    if fields.next().is_some() {
        return None;
    }
    Some((id, depth))
}

/// Parse a comma-separated id list such as `3,6,9`.
pub fn parse_id_list(text: &str) -> Result<Vec<NodeId>> {
    text.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<NodeId>()
                .with_context(|| format!("invalid node id '{s}'"))
        })
        .collect()
}

/// One node per line, indented with one `- ` per depth level.
pub fn render_tree<H: Hierarchy + ?Sized>(hierarchy: &H) -> Result<String> {
    let mut out = String::new();
    for index in 0..hierarchy.size() {
        let (id, depth) = hierarchy.entry(index)?;
        for _ in 0..depth {
            out.push_str("- ");
        }
        out.push_str(&id.to_string());
        out.push('\n');
    }
    Ok(out)
}
