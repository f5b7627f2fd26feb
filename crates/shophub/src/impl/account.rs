use chrono::Duration;
use iso8601_timestamp::Timestamp;

use crate::models::{Account, AccountInfo, OneTimeCode, ResetToken, Session};
use crate::util::{
    generate_reset_token, generate_verification_code, hash_password, normalise_email,
    validate_email,
};
use crate::{Error, Result, Shophub, ShophubEvent, Success};

fn expiry_after(seconds: i64) -> Timestamp {
    Timestamp::UNIX_EPOCH
        + iso8601_timestamp::Duration::milliseconds(
            chrono::Utc::now()
                .checked_add_signed(Duration::seconds(seconds))
                .expect("failed to checked_add_signed")
                .timestamp_millis(),
        )
}

impl OneTimeCode {
    /// Issue a fresh code valid for the given number of seconds
    pub fn generate(valid_for: i64) -> OneTimeCode {
        OneTimeCode {
            code: generate_verification_code(),
            expiry: expiry_after(valid_for),
        }
    }

    pub fn is_expired(&self) -> bool {
        Timestamp::now_utc() > self.expiry
    }
}

impl ResetToken {
    /// Issue a fresh URL token valid for the given number of seconds
    pub fn generate(valid_for: i64) -> ResetToken {
        ResetToken {
            token: generate_reset_token(),
            expiry: expiry_after(valid_for),
        }
    }
}

impl Account {
    /// Register a new account
    ///
    /// Creates the record unconfirmed with a fresh code and sends the
    /// verification email. If delivery fails the record is deleted
    /// again; an account nobody can confirm must not be left behind.
    pub async fn create(
        shophub: &Shophub,
        email: String,
        plaintext_password: String,
        username: Option<String>,
        first_name: Option<String>,
        last_name: Option<String>,
    ) -> Result<Account> {
        validate_email(&email)?;

        let email_normalised = normalise_email(email.clone());

        if shophub
            .database
            .find_account_by_normalised_email(&email_normalised)
            .await?
            .is_some()
        {
            return Err(Error::EmailInUse);
        }

        let username = username.unwrap_or_else(|| email.clone());

        if shophub
            .database
            .find_account_by_username(&username)
            .await?
            .is_some()
        {
            return Err(Error::UsernameTaken);
        }

        // Deployment invariant, not a user error
        let default_role = shophub.config.roles.default_role;
        shophub.config.roles.resolve(default_role)?;

        let password = hash_password(plaintext_password)?;

        let verification = OneTimeCode::generate(shophub.config.email.expiry.expire_verification);
        let code = verification.code.clone();

        let account = Account {
            id: ulid::Ulid::new().to_string(),

            username,
            email,
            email_normalised,
            first_name,
            last_name,
            password,

            confirmed: false,
            blocked: false,
            role: default_role,

            verification: Some(verification),
            reset_token: None,
        };

        shophub.database.save_account(&account).await?;

        if let Err(err) = shophub
            .config
            .email
            .mailer
            .send_email(
                account.email.clone(),
                &shophub.config.email.templates.verify,
                json!({ "code": code, "email": account.email }),
            )
            .await
        {
            error!(
                "Failed to send the verification email to {}: {:?}",
                account.email, err
            );

            // Compensating delete
            shophub.database.delete_account(&account.id).await?;
            return Err(Error::EmailFailed);
        }

        shophub
            .publish_event(ShophubEvent::CreateAccount {
                account: account.clone(),
            })
            .await;

        Ok(account)
    }

    /// Save model
    pub async fn save(&self, shophub: &Shophub) -> Success {
        shophub.database.save_account(self).await
    }

    /// Overwrite the active code and resend the verification email
    pub async fn resend_verification(&mut self, shophub: &Shophub) -> Success {
        let verification = OneTimeCode::generate(shophub.config.email.expiry.expire_verification);
        let code = verification.code.clone();

        self.verification = Some(verification);
        self.save(shophub).await?;

        shophub
            .config
            .email
            .mailer
            .send_email(
                self.email.clone(),
                &shophub.config.email.templates.resend,
                json!({ "code": code, "email": self.email }),
            )
            .await
    }

    /// Issue a reset code plus the parallel URL token and send the
    /// reset email
    pub async fn start_password_reset(&mut self, shophub: &Shophub) -> Success {
        let expire = shophub.config.email.expiry.expire_verification;

        let verification = OneTimeCode::generate(expire);
        let reset_token = ResetToken::generate(expire);

        let code = verification.code.clone();
        let url = format!(
            "{}?token={}&email={}",
            shophub.config.email.reset_url, reset_token.token, self.email
        );

        self.verification = Some(verification);
        self.reset_token = Some(reset_token);
        self.save(shophub).await?;

        shophub
            .config
            .email
            .mailer
            .send_email(
                self.email.clone(),
                &shophub.config.email.templates.reset,
                json!({ "code": code, "url": url, "email": self.email }),
            )
            .await
    }

    /// Check a submitted code against the active one
    ///
    /// A missing slot and a mismatching code are deliberately
    /// indistinguishable; only a matching, expired code reports expiry.
    pub fn expect_code(&self, code: &str) -> Success {
        match &self.verification {
            Some(active) if active.code == code => {
                if active.is_expired() {
                    Err(Error::ExpiredCode)
                } else {
                    Ok(())
                }
            }
            _ => Err(Error::InvalidCode),
        }
    }

    /// Grant the grace window to finish a validated reset
    ///
    /// Only the expiry moves; the code value stays untouched.
    pub fn extend_code_expiry(&mut self, shophub: &Shophub) {
        if let Some(active) = &mut self.verification {
            active.expiry = expiry_after(shophub.config.email.expiry.reset_grace_period);
        }
    }

    /// Clear the consumed code (and any parallel URL token)
    pub fn clear_verification(&mut self) {
        self.verification = None;
        self.reset_token = None;
    }

    /// Verify a user's password is correct
    pub fn verify_password(&self, plaintext_password: &str) -> Success {
        argon2::verify_encoded(&self.password, plaintext_password.as_bytes())
            .map(|v| {
                if v {
                    Ok(())
                } else {
                    Err(Error::InvalidCredentials)
                }
            })
            // To prevent user enumeration, we should ignore
            // the error and pretend the password is wrong.
            .map_err(|_| Error::InvalidCredentials)?
    }

    /// Whether the given plaintext matches the stored hash
    pub fn password_matches(&self, plaintext_password: &str) -> bool {
        argon2::verify_encoded(&self.password, plaintext_password.as_bytes()).unwrap_or(false)
    }

    /// Create a new session
    pub async fn create_session(&self, shophub: &Shophub, name: String) -> Result<Session> {
        let session = Session {
            id: ulid::Ulid::new().to_string(),
            token: nanoid!(64),

            user_id: self.id.clone(),
            name,
        };

        shophub.database.save_session(&session).await?;

        shophub
            .publish_event(ShophubEvent::CreateSession {
                session: session.clone(),
            })
            .await;

        Ok(session)
    }

    /// Delete the account and revoke every session
    pub async fn delete(self, shophub: &Shophub) -> Success {
        shophub.database.delete_all_sessions(&self.id, None).await?;
        shophub.database.delete_account(&self.id).await?;

        shophub
            .publish_event(ShophubEvent::DeleteAccount { user_id: self.id })
            .await;

        Ok(())
    }

    /// Client-safe view of this account
    pub fn sanitized(&self, shophub: &Shophub) -> Result<AccountInfo> {
        Ok(AccountInfo {
            id: self.id.clone(),
            username: self.username.clone(),
            email: self.email.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            confirmed: self.confirmed,
            blocked: self.blocked,
            role: shophub.config.roles.resolve(self.role)?.to_string(),
        })
    }
}
