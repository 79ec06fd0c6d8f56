use crate::model::CheckRecord;

const RAW_EXCERPT_MAX: usize = 100;

fn raw_excerpt(record: &CheckRecord) -> String {
    let raw = record
        .details
        .get("raw")
        .and_then(|v| v.as_str())
        .unwrap_or("");
    if raw.len() > RAW_EXCERPT_MAX {
        let cut = raw
            .char_indices()
            .take_while(|(i, _)| *i < RAW_EXCERPT_MAX)
            .last()
            .map_or(0, |(i, c)| i + c.len_utf8());
        format!("{}...", &raw[..cut])
    } else {
        raw.to_string()
    }
}

/// Print per-record outcome lines and a closing summary to stderr.
pub fn print_summary(results: &[CheckRecord]) {
    let mut pass = 0;
    let mut fail = 0;
    let mut partial = 0;

    eprintln!();
    for r in results {
        if r.success {
            pass += 1;
            eprintln!("✅ {:<26} ok", r.category);
        } else if r.partial {
            partial += 1;
            eprintln!("⚠️  {:<26} partial ({} issues)", r.category, r.issue_count());
        } else {
            fail += 1;
            let excerpt = raw_excerpt(r);
            if excerpt.is_empty() {
                eprintln!("❌ {:<26} failed", r.category);
            } else {
                eprintln!("❌ {:<26} {}", r.category, excerpt);
            }
        }
    }

    eprintln!("\n━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    eprintln!(
        "Summary: {} passed, {} failed, {} partial",
        pass,
        fail + partial,
        partial
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn raw_excerpt_truncates_long_messages() {
        let record = CheckRecord::unknown_raw("x".repeat(500));
        let excerpt = raw_excerpt(&record);
        assert!(excerpt.ends_with("..."));
        assert!(excerpt.len() <= RAW_EXCERPT_MAX + 3);
    }

    #[test]
    fn raw_excerpt_empty_when_details_has_no_raw() {
        let record = CheckRecord {
            category: "Image Validation".into(),
            success: false,
            partial: false,
            details: json!({ "issues": [] }),
        };
        assert_eq!(raw_excerpt(&record), "");
    }
}
