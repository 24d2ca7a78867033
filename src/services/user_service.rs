use std::sync::Arc;

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::user_dto::UpdateProfilePayload;
use crate::error::{Error, Result};
use crate::models::user::{User, UserProfile};
use crate::utils::token::{generate_public_id, PUBLIC_ID_LENGTH};

const FALLBACK_EMAIL_DOMAIN: &str = "no-email.orcareer.local";
const MAX_INSERT_ATTEMPTS: usize = 3;

/// Who the identity provider says the caller is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Identity {
    pub sub: String,
    pub email: Option<String>,
    pub name: Option<String>,
    pub picture: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub sub: String,
    pub public_id: String,
    pub email: String,
    pub display_name: Option<String>,
    pub avatar_url: Option<String>,
}

/// Fields refreshed on every login. `None` keeps the stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginUpdate {
    pub email: Option<String>,
    pub display_name: Option<String>,
    pub avatar_url: Option<String>,
}

#[derive(Debug, Clone)]
pub struct SyncOutcome {
    pub user: User,
    pub created: bool,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_sub(&self, sub: &str) -> Result<Option<User>>;
    async fn insert(&self, user: NewUser) -> Result<User>;
    async fn update_login(&self, id: Uuid, update: LoginUpdate) -> Result<User>;
    async fn find_profile(&self, user_id: Uuid) -> Result<Option<UserProfile>>;
    async fn upsert_profile(&self, profile: UserProfile) -> Result<UserProfile>;
}

#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn find_by_sub(&self, sub: &str) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE sub = $1")
            .bind(sub)
            .fetch_optional(&self.pool)
            .await?;
        Ok(user)
    }

    async fn insert(&self, user: NewUser) -> Result<User> {
        let created = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (sub, public_id, email, display_name, avatar_url, last_login_at)
            VALUES ($1, $2, $3, $4, $5, NOW())
            RETURNING *
            "#,
        )
        .bind(&user.sub)
        .bind(&user.public_id)
        .bind(&user.email)
        .bind(&user.display_name)
        .bind(&user.avatar_url)
        .fetch_one(&self.pool)
        .await?;
        Ok(created)
    }

    async fn update_login(&self, id: Uuid, update: LoginUpdate) -> Result<User> {
        let user = sqlx::query_as::<_, User>(
            r#"
            UPDATE users SET
                email = COALESCE($2, email),
                display_name = COALESCE($3, display_name),
                avatar_url = COALESCE($4, avatar_url),
                last_login_at = NOW(),
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&update.email)
        .bind(&update.display_name)
        .bind(&update.avatar_url)
        .fetch_one(&self.pool)
        .await?;
        Ok(user)
    }

    async fn find_profile(&self, user_id: Uuid) -> Result<Option<UserProfile>> {
        let profile = sqlx::query_as::<_, UserProfile>(
            r#"
            SELECT user_id, last_name, first_name, last_name_kana, first_name_kana,
                   university, faculty, department, graduation_year, phone_number
            FROM user_profiles
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(profile)
    }

    async fn upsert_profile(&self, profile: UserProfile) -> Result<UserProfile> {
        let saved = sqlx::query_as::<_, UserProfile>(
            r#"
            INSERT INTO user_profiles (
                user_id, last_name, first_name, last_name_kana, first_name_kana,
                university, faculty, department, graduation_year, phone_number
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            ON CONFLICT (user_id) DO UPDATE SET
                last_name = EXCLUDED.last_name,
                first_name = EXCLUDED.first_name,
                last_name_kana = EXCLUDED.last_name_kana,
                first_name_kana = EXCLUDED.first_name_kana,
                university = EXCLUDED.university,
                faculty = EXCLUDED.faculty,
                department = EXCLUDED.department,
                graduation_year = EXCLUDED.graduation_year,
                phone_number = EXCLUDED.phone_number,
                updated_at = NOW()
            RETURNING user_id, last_name, first_name, last_name_kana, first_name_kana,
                      university, faculty, department, graduation_year, phone_number
            "#,
        )
        .bind(profile.user_id)
        .bind(&profile.last_name)
        .bind(&profile.first_name)
        .bind(&profile.last_name_kana)
        .bind(&profile.first_name_kana)
        .bind(&profile.university)
        .bind(&profile.faculty)
        .bind(&profile.department)
        .bind(profile.graduation_year)
        .bind(&profile.phone_number)
        .fetch_one(&self.pool)
        .await?;
        Ok(saved)
    }
}

#[derive(Clone)]
pub struct UserService {
    repo: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    pub fn postgres(pool: PgPool) -> Self {
        Self::new(Arc::new(PgUserRepository::new(pool)))
    }

    /// Creates the account on first login and refreshes it afterwards.
    pub async fn sync(&self, identity: &Identity) -> Result<SyncOutcome> {
        let sub = identity.sub.trim();
        if sub.is_empty() {
            return Err(Error::BadRequest(
                "Missing required user ID (sub)".to_string(),
            ));
        }

        if let Some(existing) = self.repo.find_by_sub(sub).await? {
            let user = self.refresh_login(existing.id, identity).await?;
            return Ok(SyncOutcome {
                user,
                created: false,
            });
        }

        let email = non_blank(identity.email.as_deref())
            .map(str::to_string)
            .unwrap_or_else(|| {
                tracing::info!(sub, "identity has no email, using fallback address");
                fallback_email(sub)
            });

        for attempt in 1..=MAX_INSERT_ATTEMPTS {
            let new_user = NewUser {
                sub: sub.to_string(),
                public_id: generate_public_id(PUBLIC_ID_LENGTH),
                email: email.clone(),
                display_name: non_blank(identity.name.as_deref()).map(str::to_string),
                avatar_url: non_blank(identity.picture.as_deref()).map(str::to_string),
            };

            match self.repo.insert(new_user).await {
                Ok(user) => {
                    tracing::info!(user_id = %user.id, "user created");
                    return Ok(SyncOutcome {
                        user,
                        created: true,
                    });
                }
                Err(Error::Conflict(_)) => {
                    // Either a concurrent login created the row, or the public id collided.
                    if let Some(existing) = self.repo.find_by_sub(sub).await? {
                        let user = self.refresh_login(existing.id, identity).await?;
                        return Ok(SyncOutcome {
                            user,
                            created: false,
                        });
                    }
                    tracing::warn!(attempt, "public id collision, retrying");
                }
                Err(e) => return Err(e),
            }
        }

        Err(Error::Internal(
            "Could not allocate a unique public id".to_string(),
        ))
    }

    /// Returns the stored user, creating it when this is the first request.
    pub async fn ensure(&self, identity: &Identity) -> Result<User> {
        match self.repo.find_by_sub(identity.sub.trim()).await? {
            Some(user) => Ok(user),
            None => self.sync(identity).await.map(|outcome| outcome.user),
        }
    }

    pub async fn get_profile(&self, identity: &Identity) -> Result<(User, Option<UserProfile>)> {
        let user = self.ensure(identity).await?;
        let profile = self.repo.find_profile(user.id).await?;
        Ok((user, profile))
    }

    pub async fn update_profile(
        &self,
        identity: &Identity,
        payload: UpdateProfilePayload,
    ) -> Result<UserProfile> {
        let user = self.ensure(identity).await?;
        let profile = UserProfile {
            user_id: user.id,
            last_name: payload.last_name,
            first_name: payload.first_name,
            last_name_kana: payload.last_name_kana,
            first_name_kana: payload.first_name_kana,
            university: payload.university,
            faculty: payload.faculty,
            department: payload.department,
            graduation_year: payload.graduation_year,
            phone_number: payload.phone_number,
        };
        self.repo.upsert_profile(profile).await
    }

    async fn refresh_login(&self, id: Uuid, identity: &Identity) -> Result<User> {
        let update = LoginUpdate {
            email: non_blank(identity.email.as_deref()).map(str::to_string),
            display_name: non_blank(identity.name.as_deref()).map(str::to_string),
            avatar_url: non_blank(identity.picture.as_deref()).map(str::to_string),
        };
        self.repo.update_login(id, update).await
    }
}

/// Placeholder address for providers that do not share an email,
/// e.g. `facebook|123` becomes `facebook_123@no-email.orcareer.local`.
pub fn fallback_email(sub: &str) -> String {
    let mut parts = sub.splitn(2, '|');
    let provider = parts.next().filter(|p| !p.is_empty()).unwrap_or("oauth");
    let user_id = match parts.next() {
        Some(id) if !id.is_empty() => id.to_string(),
        _ => sub.chars().filter(|c| c.is_ascii_alphanumeric()).collect(),
    };
    format!("{}_{}@{}", provider, user_id, FALLBACK_EMAIL_DOMAIN)
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn stored_user(sub: &str, email: &str) -> User {
        let now = Utc::now();
        User {
            id: Uuid::new_v4(),
            sub: sub.to_string(),
            public_id: "aB3dE5gH7j".to_string(),
            email: email.to_string(),
            display_name: None,
            avatar_url: None,
            last_login_at: Some(now),
            created_at: now,
            updated_at: now,
        }
    }

    fn from_new(new_user: NewUser) -> User {
        let mut user = stored_user(&new_user.sub, &new_user.email);
        user.public_id = new_user.public_id;
        user.display_name = new_user.display_name;
        user.avatar_url = new_user.avatar_url;
        user
    }

    #[test]
    fn fallback_email_uses_provider_and_id() {
        assert_eq!(
            fallback_email("facebook|10223"),
            "facebook_10223@no-email.orcareer.local"
        );
        assert_eq!(
            fallback_email("line-abc"),
            "line-abc_lineabc@no-email.orcareer.local"
        );
        assert_eq!(fallback_email("|42"), "oauth_42@no-email.orcareer.local");
    }

    #[test]
    fn sync_rejects_blank_subject() {
        let repo = MockUserRepository::new();
        let service = UserService::new(Arc::new(repo));
        let identity = Identity {
            sub: "  ".into(),
            ..Default::default()
        };
        let err = tokio_test::block_on(service.sync(&identity)).unwrap_err();
        assert!(matches!(err, Error::BadRequest(_)));
    }

    #[test]
    fn sync_inserts_new_user_with_fallback_email() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_sub().returning(|_| Ok(None));
        repo.expect_insert()
            .withf(|u| {
                u.sub == "twitter|99"
                    && u.email == "twitter_99@no-email.orcareer.local"
                    && u.public_id.len() == PUBLIC_ID_LENGTH
                    && u.display_name.as_deref() == Some("Taro")
            })
            .times(1)
            .returning(|u| Ok(from_new(u)));

        let service = UserService::new(Arc::new(repo));
        let identity = Identity {
            sub: "twitter|99".into(),
            email: None,
            name: Some("Taro".into()),
            picture: None,
        };
        let outcome = tokio_test::block_on(service.sync(&identity)).unwrap();
        assert!(outcome.created);
        assert_eq!(outcome.user.email, "twitter_99@no-email.orcareer.local");
    }

    #[test]
    fn sync_updates_existing_user_without_clobbering_email() {
        let existing = stored_user("google-oauth2|1", "hanako@example.jp");
        let existing_id = existing.id;
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_sub()
            .returning(move |_| Ok(Some(existing.clone())));
        repo.expect_insert().never();
        repo.expect_update_login()
            .withf(move |id, update| {
                *id == existing_id && update.email.is_none() && update.avatar_url.is_some()
            })
            .times(1)
            .returning(|_, _| Ok(stored_user("google-oauth2|1", "hanako@example.jp")));

        let service = UserService::new(Arc::new(repo));
        let identity = Identity {
            sub: "google-oauth2|1".into(),
            email: Some("".into()),
            name: None,
            picture: Some("https://cdn.example.jp/a.png".into()),
        };
        let outcome = tokio_test::block_on(service.sync(&identity)).unwrap();
        assert!(!outcome.created);
        assert_eq!(outcome.user.email, "hanako@example.jp");
    }

    #[test]
    fn sync_recovers_from_concurrent_insert() {
        let mut repo = MockUserRepository::new();
        let mut lookups = 0;
        repo.expect_find_by_sub().times(2).returning(move |sub| {
            lookups += 1;
            if lookups == 1 {
                Ok(None)
            } else {
                Ok(Some(stored_user(sub, "raced@example.jp")))
            }
        });
        repo.expect_insert()
            .times(1)
            .returning(|_| Err(Error::Conflict("Resource already exists".into())));
        repo.expect_update_login()
            .times(1)
            .returning(|_, _| Ok(stored_user("auth0|7", "raced@example.jp")));

        let service = UserService::new(Arc::new(repo));
        let identity = Identity {
            sub: "auth0|7".into(),
            email: Some("raced@example.jp".into()),
            ..Default::default()
        };
        let outcome = tokio_test::block_on(service.sync(&identity)).unwrap();
        assert!(!outcome.created);
    }

    #[test]
    fn update_profile_writes_for_ensured_user() {
        let existing = stored_user("auth0|5", "jiro@example.jp");
        let user_id = existing.id;
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_sub()
            .returning(move |_| Ok(Some(existing.clone())));
        repo.expect_upsert_profile()
            .withf(move |p| p.user_id == user_id && p.graduation_year == Some(2027))
            .times(1)
            .returning(Ok);

        let service = UserService::new(Arc::new(repo));
        let identity = Identity {
            sub: "auth0|5".into(),
            ..Default::default()
        };
        let payload = UpdateProfilePayload {
            university: Some("静岡大学".into()),
            graduation_year: Some(2027),
            ..Default::default()
        };
        let saved = tokio_test::block_on(service.update_profile(&identity, payload)).unwrap();
        assert_eq!(saved.university.as_deref(), Some("静岡大学"));
    }
}
