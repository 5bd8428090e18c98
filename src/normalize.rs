use serde_json::Value;

/// Flatten a transcript panel object into trimmed, non-empty caption lines.
///
/// The panel shape varies across videos and client versions, so every level
/// is probed through an ordered list of candidates and missing or wrong-typed
/// fields degrade to the next candidate instead of failing.
pub fn caption_lines(content: &Value) -> Vec<String> {
    let body = locate_body(content);
    let mut lines = Vec::new();

    for segment in locate_segments(body) {
        let segment = segment.get("transcriptSegmentRenderer").unwrap_or(segment);
        let text = segment_text(segment);
        let text = html_escape::decode_html_entities(&text);
        let trimmed = text.trim();
        if !trimmed.is_empty() {
            lines.push(trimmed.to_string());
        }
    }

    lines
}

fn locate_body(content: &Value) -> &Value {
    let body = content
        .get("body")
        .or_else(|| content.pointer("/contents/0/body"))
        .or_else(|| content.pointer("/panel/body"))
        .unwrap_or(content);

    // Raw responses wrap the segment list in a renderer object
    body.get("transcriptSegmentListRenderer").unwrap_or(body)
}

fn locate_segments(body: &Value) -> &[Value] {
    ["initial_segments", "initialSegments", "segments"]
        .iter()
        .find_map(|key| body.get(key).and_then(Value::as_array))
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

fn segment_text(segment: &Value) -> String {
    if let Some(runs) = segment.pointer("/snippet/runs").and_then(Value::as_array) {
        return runs
            .iter()
            .map(|run| run.get("text").and_then(Value::as_str).unwrap_or(""))
            .collect();
    }

    segment
        .get("text")
        .and_then(Value::as_str)
        .unwrap_or("")
        .to_string()
}
