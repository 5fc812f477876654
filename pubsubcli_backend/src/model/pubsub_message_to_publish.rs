#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PubsubMessageToPublish {
    data: String,
}

impl PubsubMessageToPublish {
    pub fn new(data: String) -> Self {
        Self { data }
    }

    pub fn data(&self) -> &str {
        &self.data
    }
}

impl From<PubsubMessageToPublish> for google_cloud_googleapis::pubsub::v1::PubsubMessage {
    fn from(val: PubsubMessageToPublish) -> Self {
        Self {
            data: val.data.into(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use google_cloud_googleapis::pubsub::v1::PubsubMessage;

    #[test]
    fn converts_body_to_bare_payload() {
        let message: PubsubMessage = PubsubMessageToPublish::new("hello".to_string()).into();

        assert_eq!(message.data, b"hello".to_vec());
        assert!(message.attributes.is_empty());
        assert!(message.ordering_key.is_empty());
    }

    #[test]
    fn keeps_multibyte_utf8_intact() {
        let message: PubsubMessage = PubsubMessageToPublish::new("héllo ✓".to_string()).into();

        assert_eq!(message.data, "héllo ✓".as_bytes().to_vec());
    }
}
