use crate::IngestError;

/// Splits one CSV record. Quoted fields may contain commas and `""`
/// escapes; a quoted field spanning lines is rejected.
pub(crate) fn split_record(line: &str) -> Result<Vec<String>, IngestError> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut chars = line.chars().peekable();
    let mut in_quotes = false;
    let mut quoted = false;
    while let Some(c) = chars.next() {
        if in_quotes {
            match c {
                '"' if chars.peek() == Some(&'"') => {
                    chars.next();
                    field.push('"');
                }
                '"' => in_quotes = false,
                other => field.push(other),
            }
            continue;
        }
        match c {
            ',' => {
                fields.push(finish(&mut field, quoted));
                quoted = false;
            }
            '"' if field.trim().is_empty() && !quoted => {
                field.clear();
                in_quotes = true;
                quoted = true;
            }
            other => field.push(other),
        }
    }
    if in_quotes {
        return Err(IngestError(format!("unterminated quoted field: {line}")));
    }
    fields.push(finish(&mut field, quoted));
    Ok(fields)
}

fn finish(field: &mut String, quoted: bool) -> String {
    let out = if quoted {
        field.clone()
    } else {
        field.trim().to_string()
    };
    field.clear();
    out
}

pub(crate) fn escape_field(field: &str) -> String {
    if field.contains(|c: char| matches!(c, ',' | '"' | '\n' | '\r')) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_fields_are_trimmed() {
        assert_eq!(
            split_record("110001, Central Delhi ,DELHI").expect("split"),
            vec!["110001", "Central Delhi", "DELHI"]
        );
    }

    #[test]
    fn quoted_fields_keep_commas_and_escaped_quotes() {
        assert_eq!(
            split_record(r#"560001,"Bangalore, Urban","Office ""GPO""","""#).expect("split"),
            vec!["560001", "Bangalore, Urban", "Office \"GPO\"", ""]
        );
    }

    #[test]
    fn trailing_comma_yields_empty_field() {
        assert_eq!(split_record("a,b,").expect("split"), vec!["a", "b", ""]);
    }

    #[test]
    fn unterminated_quote_is_an_error() {
        let err = split_record(r#"1,"open"#).expect_err("unterminated");
        assert!(err.0.contains("unterminated"));
    }

    #[test]
    fn escape_quotes_only_when_needed() {
        assert_eq!(escape_field("≤ 2000"), "≤ 2000");
        assert_eq!(escape_field("a, b"), "\"a, b\"");
        assert_eq!(escape_field("say \"hi\""), "\"say \"\"hi\"\"\"");
    }
}
