use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::registration::MemberDraft;
use chrono::Utc;
use entity::member::{ActiveModel as MemberActive, Entity as Member};
use entity::team::{ActiveModel as TeamActive, Entity as Team, Model as TeamModel};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait, Set, SqlErr};
use uuid::Uuid;

/// Terminal states of the two-step team+members write.
#[derive(Debug)]
pub enum RegistrationOutcome {
    Committed(TeamModel),
    /// A member insert failed and the compensating team delete succeeded;
    /// the original error is carried, never the compensation's.
    RolledBack(AppError),
    /// The compensating delete itself failed: an orphan team may be left
    /// behind for operational tooling to find and reconcile.
    Inconsistent {
        team_id: Uuid,
        cause: AppError,
        compensation: DbErr,
    },
}

impl RegistrationOutcome {
    /// Collapse the outcome for callers that only need the committed team or
    /// the error to surface. The compensation failure is logged with the
    /// orphan team id so it can be reconciled later; the registrant always
    /// gets the member-insert error, never the compensation's.
    pub fn into_result(self) -> Result<TeamModel, AppError> {
        match self {
            RegistrationOutcome::Committed(team) => Ok(team),
            RegistrationOutcome::RolledBack(cause) => Err(cause),
            RegistrationOutcome::Inconsistent {
                team_id,
                cause,
                compensation,
            } => {
                log::error!(
                    "compensating delete failed for team {}: {} (original error: {})",
                    team_id,
                    compensation,
                    cause
                );
                Err(cause)
            }
        }
    }
}

impl PostgresService {
    pub async fn count_teams(&self) -> Result<u64, AppError> {
        Ok(Team::find().count(&self.db).await?)
    }

    /// Capacity-gated team+members registration.
    ///
    /// The store exposes no multi-table transaction to this tier, so the
    /// write is a saga: insert the team, insert the members one at a time,
    /// and on a member failure delete the team again (cascade removes any
    /// members already written). Unique-index violations on identifier or
    /// email are classified so the registrant learns which field collided.
    ///
    /// The capacity check is a committed-count read followed by a separate
    /// insert. Concurrent submissions can slip past the limit inside that
    /// window; the over-admission margin is small and accepted rather than
    /// papered over with an in-process lock that a second instance would
    /// not share anyway.
    pub async fn submit_registration(
        &self,
        team_name: String,
        members: Vec<MemberDraft>,
    ) -> Result<RegistrationOutcome, AppError> {
        let settings = self.get_settings().await?;
        if !settings.registrations_open {
            return Err(AppError::RegistrationsClosed);
        }
        if settings.registration_limit > 0
            && self.count_teams().await? >= settings.registration_limit
        {
            return Err(AppError::CapacityExceeded);
        }

        let team_id = Uuid::new_v4();
        let now = Utc::now();
        Team::insert(TeamActive {
            id: Set(team_id),
            name: Set(team_name),
            created_at: Set(now),
        })
        .exec(&self.db)
        .await?;

        for (position, draft) in members.into_iter().enumerate() {
            let identifier = draft.identifier.clone();
            let email = draft.email.clone();
            let row = MemberActive {
                id: Set(Uuid::new_v4()),
                team_id: Set(team_id),
                full_name: Set(draft.full_name),
                identifier: Set(draft.identifier),
                gender: Set(draft.gender),
                department: Set(draft.department),
                year: Set(draft.year),
                section: Set(draft.section),
                email: Set(draft.email),
                mobile: Set(draft.mobile),
                is_leader: Set(position == 0),
                created_at: Set(now),
            };
            if let Err(err) = Member::insert(row).exec(&self.db).await {
                let cause = classify_member_insert(err, &identifier, &email);
                return Ok(match Team::delete_by_id(team_id).exec(&self.db).await {
                    Ok(_) => RegistrationOutcome::RolledBack(cause),
                    Err(compensation) => RegistrationOutcome::Inconsistent {
                        team_id,
                        cause,
                        compensation,
                    },
                });
            }
        }

        let committed = Team::find_by_id(team_id)
            .one(&self.db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("Team vanished after commit".into()))?;
        Ok(RegistrationOutcome::Committed(committed))
    }
}

fn classify_member_insert(err: DbErr, identifier: &str, email: &str) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(detail)) => {
            if detail.contains("identifier") {
                AppError::DuplicateIdentifier(identifier.to_string())
            } else if detail.contains("email") {
                AppError::DuplicateEmail(email.to_string())
            } else {
                AppError::Db(err)
            }
        }
        _ => AppError::Db(err),
    }
}
