use crate::TeamMember;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeamMemberPatch {
    pub name: Option<String>,
    pub role: Option<String>,
    pub capacity: Option<u32>,
}

impl TeamMemberPatch {
    pub fn apply_to(&self, member: &mut TeamMember) {
        if let Some(name) = &self.name {
            member.name = name.clone();
        }
        if let Some(role) = &self.role {
            member.role = role.clone();
        }
        if let Some(capacity) = self.capacity {
            member.capacity = capacity;
        }
    }
}
