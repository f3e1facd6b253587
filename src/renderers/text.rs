//! Plain-text rendering of the detail panel.

use crate::detail::NodeDetail;
use crate::model::Kind;
use crate::theme;

/// Title line, one `Label: value` line per field, then the pod list if any.
pub fn render_detail(detail: &NodeDetail) -> String {
    let mut lines = vec![detail.title.clone()];
    lines.extend(
        detail
            .fields
            .iter()
            .map(|f| format!("{}: {}", f.label, f.value)),
    );
    if !detail.synthetic_pods.is_empty() {
        lines.push(String::new());
        lines.push("Pods".to_string());
        let icon = theme::kind_icon(&Kind::Pod);
        lines.extend(detail.synthetic_pods.iter().map(|p| {
            format!(
                "  {icon} {} — {}, {} ready on {}",
                p.name, p.status, p.ready, p.host
            )
        }));
    }
    let mut out = lines.join("\n");
    out.push('\n');
    out
}
