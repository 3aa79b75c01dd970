use serde::{Deserialize, Serialize};

use arbor_core::{Entity, GroupId};

/// Group of users sharing the same access profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub id: GroupId,
    pub code: String,
    pub name: String,
}

impl Group {
    pub fn new(id: GroupId, code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id,
            code: code.into(),
            name: name.into(),
        }
    }
}

impl Entity for Group {
    type Id = GroupId;

    fn id(&self) -> Self::Id {
        self.id
    }
}
