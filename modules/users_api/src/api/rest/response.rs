use serde::Serialize;

/// Success envelope shared by all data operations.
///
/// Serializes as `{"status":"success"}` plus the optional `message`
/// and `data` members.
#[derive(Debug, Serialize)]
pub struct Envelope<T> {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    pub fn data(data: T) -> Self {
        Self {
            status: "success",
            message: None,
            data: Some(data),
        }
    }

    pub fn with_message(message: &'static str, data: T) -> Self {
        Self {
            status: "success",
            message: Some(message),
            data: Some(data),
        }
    }
}

impl Envelope<()> {
    pub fn message(message: &'static str) -> Self {
        Self {
            status: "success",
            message: Some(message),
            data: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_envelope_shape() {
        let body = serde_json::to_value(Envelope::data(vec![1, 2])).unwrap();
        assert_eq!(body["status"], "success");
        assert_eq!(body["data"], serde_json::json!([1, 2]));
        assert!(body.get("message").is_none());
    }

    #[test]
    fn message_envelope_omits_data() {
        let body = serde_json::to_value(Envelope::message("User deleted successfully")).unwrap();
        assert_eq!(body["status"], "success");
        assert_eq!(body["message"], "User deleted successfully");
        assert!(body.get("data").is_none());
    }
}
