use std::collections::{BTreeMap, BTreeSet, HashSet};

use crate::server::{
    error::{merge::MergeError, Error},
    model::db::CouncilMemberAliasModel,
    service::merge::registry::MemberRegistry,
};

/// Everything a merge changes, expressed as ID sets collected up front
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MergePlan {
    pub primary: i32,
    pub primary_name: String,
    /// Members folded into the primary, ascending and never containing the primary
    pub duplicates: Vec<i32>,
    pub repoint_aliases: Vec<i32>,
    /// Aliases whose name the primary already carries after the merge
    pub delete_aliases: Vec<i32>,
    pub repoint_tenures: Vec<i32>,
    pub repoint_votes: Vec<i32>,
    /// Legislation keys the primary does not yet sponsor
    pub add_sponsorships: Vec<i32>,
}

impl MergePlan {
    fn noop(primary: i32, primary_name: String) -> Self {
        Self {
            primary,
            primary_name,
            duplicates: Vec::new(),
            repoint_aliases: Vec::new(),
            delete_aliases: Vec::new(),
            repoint_tenures: Vec::new(),
            repoint_votes: Vec::new(),
            add_sponsorships: Vec::new(),
        }
    }

    pub fn is_noop(&self) -> bool {
        self.duplicates.is_empty()
    }

    /// The primary followed by every duplicate
    pub fn member_ids(&self) -> Vec<i32> {
        let mut ids = Vec::with_capacity(self.duplicates.len() + 1);
        ids.push(self.primary);
        ids.extend_from_slice(&self.duplicates);
        ids
    }
}

/// Plans the merge of `duplicates` into `primary`.
///
/// The primary is dropped from `duplicates` if present; an empty remainder yields a no-op
/// plan. Reads are one bulk query each for members, aliases, tenures, votes and
/// sponsorships regardless of how many duplicates or rows are involved.
///
/// # Errors
/// - [`MergeError::UnknownMember`] if the primary or any duplicate does not exist
pub async fn plan_merge<R>(registry: &R, primary: i32, duplicates: &[i32]) -> Result<MergePlan, Error>
where
    R: MemberRegistry + Sync,
{
    let duplicates: Vec<i32> = duplicates
        .iter()
        .copied()
        .filter(|id| *id != primary)
        .collect::<BTreeSet<i32>>()
        .into_iter()
        .collect();

    let mut member_ids = Vec::with_capacity(duplicates.len() + 1);
    member_ids.push(primary);
    member_ids.extend_from_slice(&duplicates);

    let members = registry.find_members(&member_ids).await?;
    let found: HashSet<i32> = members.iter().map(|m| m.id).collect();

    let mut missing: Vec<i32> = member_ids
        .iter()
        .copied()
        .filter(|id| !found.contains(id))
        .collect();
    if !missing.is_empty() {
        missing.sort_unstable();
        return Err(MergeError::UnknownMember(missing).into());
    }

    let primary_name = members
        .iter()
        .find(|m| m.id == primary)
        .map(|m| m.real_name.clone())
        .ok_or_else(|| Error::InternalError(format!("member {} found but not returned", primary)))?;

    if duplicates.is_empty() {
        return Ok(MergePlan::noop(primary, primary_name));
    }

    let aliases = registry.find_aliases_for(&member_ids).await?;
    let (repoint_aliases, delete_aliases) = fold_aliases(primary, &duplicates, aliases);

    let repoint_tenures = registry
        .find_tenure_ids_for(&duplicates)
        .await?
        .into_iter()
        .map(|(tenure_id, _)| tenure_id)
        .collect();

    let repoint_votes = registry
        .find_vote_ids_for(&duplicates)
        .await?
        .into_iter()
        .map(|(vote_id, _)| vote_id)
        .collect();

    let sponsorships = registry.find_sponsored_keys_for(&member_ids).await?;
    let already_sponsored: HashSet<i32> = sponsorships
        .iter()
        .filter(|(_, member_id)| *member_id == primary)
        .map(|(key, _)| *key)
        .collect();
    let add_sponsorships = sponsorships
        .into_iter()
        .filter(|(key, member_id)| *member_id != primary && !already_sponsored.contains(key))
        .map(|(key, _)| key)
        .collect::<BTreeSet<i32>>()
        .into_iter()
        .collect();

    Ok(MergePlan {
        primary,
        primary_name,
        duplicates,
        repoint_aliases,
        delete_aliases,
        repoint_tenures,
        repoint_votes,
        add_sponsorships,
    })
}

/// Splits the duplicates' aliases into `(repoint, delete)` alias ID lists.
///
/// Names start out as the primary's alias names. Duplicates are visited in the order given
/// and an alias is kept only if no alias seen so far carries the same name, compared
/// case-sensitively. Later repeats, including repeats within one duplicate, are deleted.
fn fold_aliases(
    primary: i32,
    duplicates: &[i32],
    aliases: Vec<CouncilMemberAliasModel>,
) -> (Vec<i32>, Vec<i32>) {
    let mut by_member: BTreeMap<i32, Vec<CouncilMemberAliasModel>> = BTreeMap::new();
    for alias in aliases {
        by_member.entry(alias.member_id).or_default().push(alias);
    }

    let mut seen: HashSet<String> = by_member
        .remove(&primary)
        .unwrap_or_default()
        .into_iter()
        .map(|alias| alias.name)
        .collect();

    let mut repoint = Vec::new();
    let mut delete = Vec::new();

    for duplicate in duplicates {
        for alias in by_member.remove(duplicate).unwrap_or_default() {
            if seen.insert(alias.name) {
                repoint.push(alias.id);
            } else {
                delete.push(alias.id);
            }
        }
    }

    (repoint, delete)
}
