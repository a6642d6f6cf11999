use crate::utils::error::{CheckError, Result};
use serde_json::Value;

/// Pulls the `cpf` field out of a JSON request body, returning it as supplied.
///
/// An empty body, `null`, a missing field, `null` or `""` all count as
/// missing input. Non-negative integers are accepted in their decimal form;
/// other numbers are rejected as a malformed body.
pub fn extract_cpf(body: &[u8]) -> Result<String> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(CheckError::InputMissing);
    }

    let value: Value =
        serde_json::from_slice(body).map_err(|e| CheckError::InvalidRequestBody {
            message: e.to_string(),
        })?;

    let object = match value {
        Value::Null => return Err(CheckError::InputMissing),
        Value::Object(object) => object,
        other => {
            return Err(CheckError::InvalidRequestBody {
                message: format!("expected a JSON object, got {}", json_type(&other)),
            })
        }
    };

    match object.get("cpf") {
        None | Some(Value::Null) => Err(CheckError::InputMissing),
        Some(Value::String(s)) if s.is_empty() => Err(CheckError::InputMissing),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(Value::Number(n)) => match n.as_u64() {
            Some(digits) => Ok(digits.to_string()),
            None => Err(CheckError::InvalidRequestBody {
                message: format!("'cpf' must be a non-negative integer, got {}", n),
            }),
        },
        Some(other) => Err(CheckError::InvalidRequestBody {
            message: format!("'cpf' must be a string, got {}", json_type(other)),
        }),
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn returns_identifier_unmodified() {
        assert_eq!(
            extract_cpf(br#"{"cpf": "123.456.789-09"}"#).unwrap(),
            "123.456.789-09"
        );
        assert_eq!(
            extract_cpf(br#"{"cpf": " 1 ", "name": "x"}"#).unwrap(),
            " 1 "
        );
    }

    #[test]
    fn accepts_numeric_identifier() {
        assert_eq!(extract_cpf(br#"{"cpf": 52998224725}"#).unwrap(), "52998224725");
    }

    #[test]
    fn missing_input_variants() {
        let bodies: [&[u8]; 7] = [
            b"",
            b"   \n",
            b"null",
            b"{}",
            br#"{"cpf": null}"#,
            br#"{"cpf": ""}"#,
            br#"{"CPF": "12345678909"}"#,
        ];
        for body in bodies {
            assert!(
                matches!(extract_cpf(body), Err(CheckError::InputMissing)),
                "{:?}",
                String::from_utf8_lossy(body)
            );
        }
    }

    #[test]
    fn malformed_bodies() {
        let bodies: [&[u8]; 7] = [
            b"{",
            b"cpf=12345678909",
            b"[\"12345678909\"]",
            br#"{"cpf": true}"#,
            br#"{"cpf": ["12345678909"]}"#,
            br#"{"cpf": 12345678909.0}"#,
            br#"{"cpf": -12345678909}"#,
        ];
        for body in bodies {
            assert!(
                matches!(extract_cpf(body), Err(CheckError::InvalidRequestBody { .. })),
                "{:?}",
                String::from_utf8_lossy(body)
            );
        }
    }
}
