//! Post events: emitted after the store changes.

use serde::{Deserialize, Serialize};

use crate::id::PostId;

/// Something that happened to the post collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PostEvent {
    /// A post was appended to the store.
    Created { id: PostId },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_serialize_with_type_tag() {
        let event = PostEvent::Created {
            id: PostId::from_sequence(7),
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json, serde_json::json!({"type": "created", "id": "7"}));
    }
}
