//! Pure domain → wire mapping.
//!
//! Total functions only: every domain value maps to exactly one wire value,
//! with a single default arm for values outside the known set. Nothing here
//! does I/O or can fail.

use crate::traits::group::{DomainSex, MemberRecord, MemberRole};
use crate::types::ids::PublicId;
use crate::types::wire::{GroupMember, PermissionLevel, WireSex};

/// Maps the domain sex to the wire vocabulary. Unknown codes become
/// `UNKNOWN`, never an error.
pub fn sex_to_wire(sex: DomainSex) -> WireSex {
    match sex {
        DomainSex::Male => WireSex::Male,
        DomainSex::Female => WireSex::Female,
        DomainSex::Other(_) => WireSex::Unknown,
    }
}

/// Maps the domain role to the wire permission level. Roles outside the
/// normal/admin/owner set become `FALLBACK`, never an error.
pub fn role_to_wire(role: MemberRole) -> PermissionLevel {
    match role {
        MemberRole::Normal => PermissionLevel::Normal,
        MemberRole::Admin => PermissionLevel::Admin,
        MemberRole::Owner => PermissionLevel::Owner,
        MemberRole::Other(_) => PermissionLevel::Fallback,
    }
}

/// Unit policy for timestamps crossing to the wire.
///
/// The domain API reports epoch seconds and the wire schema documents
/// seconds, so this is a passthrough. It exists as a named function so the
/// policy is testable and lives in exactly one place if the schema is ever
/// confirmed to want milliseconds.
pub fn wire_timestamp(domain_seconds: u64) -> u64 {
    domain_seconds
}

/// Marshals a raw domain member record into the wire member entity.
///
/// The public id comes from the caller; the record itself is session-scoped
/// and never carries one. An empty display card marshals as an absent field.
pub fn member_to_wire(public_id: PublicId, record: MemberRecord) -> GroupMember {
    GroupMember {
        uin: public_id,
        nick: record.nick,
        sex: sex_to_wire(record.sex),
        age: record.age,
        qid: record.qid,
        group_nick: if record.card_name.is_empty() {
            None
        } else {
            Some(record.card_name)
        },
        permission_level: role_to_wire(record.role),
        is_robot: record.is_robot,
        last_speak_time: wire_timestamp(record.last_speak_time),
        shut_up_remaining: wire_timestamp(record.shut_up_remaining),
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::types::ids::SessionId;

    fn record(role: MemberRole) -> MemberRecord {
        MemberRecord {
            session_id: SessionId::new("u-abc"),
            nick: "nick".to_string(),
            sex: DomainSex::Female,
            age: 30,
            qid: "qid-1".to_string(),
            card_name: "card".to_string(),
            role,
            is_robot: false,
            last_speak_time: 1_700_000_000,
            shut_up_remaining: 60,
        }
    }

    #[test]
    fn role_mapping_is_exhaustive() {
        assert_eq!(role_to_wire(MemberRole::Normal), PermissionLevel::Normal);
        assert_eq!(role_to_wire(MemberRole::Admin), PermissionLevel::Admin);
        assert_eq!(role_to_wire(MemberRole::Owner), PermissionLevel::Owner);
        assert_eq!(role_to_wire(MemberRole::Other(7)), PermissionLevel::Fallback);
    }

    #[test]
    fn sex_mapping_is_exhaustive() {
        assert_eq!(sex_to_wire(DomainSex::Male), WireSex::Male);
        assert_eq!(sex_to_wire(DomainSex::Female), WireSex::Female);
        assert_eq!(sex_to_wire(DomainSex::Other(255)), WireSex::Unknown);
    }

    #[test]
    fn timestamps_pass_through_unscaled() {
        assert_eq!(wire_timestamp(0), 0);
        assert_eq!(wire_timestamp(1_700_000_000), 1_700_000_000);
    }

    #[test]
    fn empty_card_marshals_as_absent() {
        let mut rec = record(MemberRole::Normal);
        rec.card_name = String::new();
        let member = member_to_wire(PublicId::new("987654321"), rec);
        assert_eq!(member.group_nick, None);

        let member = member_to_wire(PublicId::new("987654321"), record(MemberRole::Normal));
        assert_eq!(member.group_nick, Some("card".to_string()));
    }

    #[test]
    fn member_marshals_all_fields() {
        let member = member_to_wire(PublicId::new("987654321"), record(MemberRole::Admin));
        assert_eq!(member.uin, PublicId::new("987654321"));
        assert_eq!(member.nick, "nick");
        assert_eq!(member.sex, WireSex::Female);
        assert_eq!(member.age, 30);
        assert_eq!(member.qid, "qid-1");
        assert_eq!(member.permission_level, PermissionLevel::Admin);
        assert!(!member.is_robot);
        assert_eq!(member.last_speak_time, 1_700_000_000);
        assert_eq!(member.shut_up_remaining, 60);
    }

    proptest! {
        #[test]
        fn any_unknown_role_code_maps_to_fallback(code in any::<u32>()) {
            prop_assert_eq!(
                role_to_wire(MemberRole::Other(code)),
                PermissionLevel::Fallback
            );
        }

        #[test]
        fn any_unknown_sex_code_maps_to_unknown(code in any::<u32>()) {
            prop_assert_eq!(sex_to_wire(DomainSex::Other(code)), WireSex::Unknown);
        }
    }
}
