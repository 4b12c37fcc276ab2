//! Main account lifecycle service implementation

use std::sync::Arc;

use chrono::Utc;
use tracing::{info, warn};

use crate::domain::entities::donor::{Donor, DonorProfile};
use crate::domain::entities::verification_code::VerificationCode;
use crate::errors::{AccountError, DomainResult};
use crate::repositories::DonorRepository;
use crate::services::mailer::Mailer;
use crate::services::password::PasswordHasher;
use crate::services::token::TokenService;

use super::config::AccountServiceConfig;

const VERIFY_SUBJECT: &str = "Verify your BloodBridge account";
const RESEND_SUBJECT: &str = "Your new BloodBridge verification code";

/// Successful login outcome: a bearer token plus the donor it belongs to
#[derive(Debug, Clone)]
pub struct LoginResult {
    pub token: String,
    pub donor: Donor,
}

/// Service orchestrating the account lifecycle against the donor store.
///
/// States: `Unregistered -> PendingVerification -> Verified` (terminal),
/// with `PendingVerification -> Purged` handled by the expiry sweeper.
pub struct AccountService<D, M>
where
    D: DonorRepository,
    M: Mailer,
{
    /// Donor repository for persistence
    donor_repository: Arc<D>,
    /// Outbound email transport for verification codes
    mailer: Arc<M>,
    /// Bearer token issuance
    token_service: Arc<TokenService>,
    /// Credential hashing
    password_hasher: PasswordHasher,
    /// Service configuration
    config: AccountServiceConfig,
}

impl<D, M> AccountService<D, M>
where
    D: DonorRepository,
    M: Mailer,
{
    pub fn new(
        donor_repository: Arc<D>,
        mailer: Arc<M>,
        token_service: Arc<TokenService>,
        config: AccountServiceConfig,
    ) -> Self {
        Self {
            donor_repository,
            mailer,
            token_service,
            password_hasher: PasswordHasher::new(),
            config,
        }
    }

    /// Replace the default hasher, mainly to lower the bcrypt cost in tests
    pub fn with_password_hasher(mut self, hasher: PasswordHasher) -> Self {
        self.password_hasher = hasher;
        self
    }

    /// Register a new donor account.
    ///
    /// Hashes the password, generates a verification code, persists the
    /// donor unverified, and emails the code. The unique index on email
    /// backstops the duplicate check, so a concurrent signup racing to the
    /// same address still resolves to `EmailAlreadyRegistered`.
    pub async fn signup(
        &self,
        profile: DonorProfile,
        password: &str,
        confirm_password: &str,
    ) -> DomainResult<()> {
        if password != confirm_password {
            return Err(AccountError::PasswordMismatch.into());
        }

        profile.validate()?;

        if self
            .donor_repository
            .find_by_email(&profile.email)
            .await?
            .is_some()
        {
            return Err(AccountError::EmailAlreadyRegistered.into());
        }

        let password_hash = self.password_hasher.hash(password)?;
        let code = VerificationCode::generate(self.config.code_expiry_minutes);

        let mut donor = Donor::new(profile, password_hash);
        donor.set_verification_code(&code);
        let donor = self.donor_repository.create(donor).await?;

        info!("Registered donor {} pending verification", donor.id);

        self.send_code_email(&donor.email, &code, VERIFY_SUBJECT)
            .await?;

        Ok(())
    }

    /// Verify a donor's email with the code they received.
    ///
    /// Code mismatch and code expiry are deliberately reported as one
    /// error. A second verification attempt on an already-verified account
    /// is informational, not a state change.
    pub async fn verify_email(&self, email: &str, code: &str) -> DomainResult<()> {
        let mut donor = self
            .donor_repository
            .find_by_email(email)
            .await?
            .ok_or(AccountError::AccountNotFound)?;

        if donor.is_verified {
            return Err(AccountError::AlreadyVerified.into());
        }

        if !donor.accepts_code(code, Utc::now()) {
            return Err(AccountError::InvalidOrExpiredCode.into());
        }

        donor.verify();
        self.donor_repository.update(donor).await?;

        Ok(())
    }

    /// Issue a fresh verification code, invalidating the previous one.
    pub async fn resend_code(&self, email: &str) -> DomainResult<()> {
        let mut donor = self
            .donor_repository
            .find_by_email(email)
            .await?
            .ok_or(AccountError::AccountNotFound)?;

        if donor.is_verified {
            return Err(AccountError::AlreadyVerified.into());
        }

        let code = VerificationCode::generate(self.config.code_expiry_minutes);
        donor.set_verification_code(&code);
        let donor = self.donor_repository.update(donor).await?;

        self.send_code_email(&donor.email, &code, RESEND_SUBJECT)
            .await?;

        Ok(())
    }

    /// Authenticate a verified donor and issue a bearer token.
    ///
    /// Check order is existence, then verification status, then password:
    /// an unverified account never learns whether its password was correct,
    /// and unknown email shares `InvalidCredentials` with wrong password.
    pub async fn login(&self, email: &str, password: &str) -> DomainResult<LoginResult> {
        let donor = self
            .donor_repository
            .find_by_email(email)
            .await?
            .ok_or(AccountError::InvalidCredentials)?;

        if !donor.is_verified {
            return Err(AccountError::EmailNotVerified.into());
        }

        if !self
            .password_hasher
            .verify(password, &donor.password_hash)?
        {
            return Err(AccountError::InvalidCredentials.into());
        }

        let token = self.token_service.generate_token(donor.id)?;

        info!("Donor {} logged in", donor.id);

        Ok(LoginResult { token, donor })
    }

    async fn send_code_email(
        &self,
        to: &str,
        code: &VerificationCode,
        subject: &str,
    ) -> DomainResult<()> {
        let body = format!(
            "<p>Your verification code is: <b>{}</b>. It expires in {} minutes.</p>",
            code.code, self.config.code_expiry_minutes
        );

        self.mailer.send(to, subject, &body).await.map_err(|e| {
            warn!("Verification email to {} failed: {}", mask_email(to), e);
            AccountError::EmailDeliveryFailure.into()
        })
    }
}

/// Mask an email address for logs, keeping only the first character and the
/// domain
pub fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) => {
            let head = local.chars().next().unwrap_or('*');
            format!("{}***@{}", head, domain)
        }
        None => "***".to_string(),
    }
}
