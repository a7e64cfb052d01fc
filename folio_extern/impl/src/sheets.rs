use std::sync::Arc;

use anyhow::Context;
use chrono::{DateTime, Utc};
use folio_extern_contracts::sheets::SheetsApiService;
use folio_models::contact::{SheetRow, SHEET_HEADER};
use folio_shared_contracts::time::TimeService;
use jsonwebtoken::{Algorithm, EncodingKey, Header};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::http::HttpClient;

const TOKEN_ENDPOINT: &str = "https://oauth2.googleapis.com/token";
const API_BASE: &str = "https://sheets.googleapis.com/v4/spreadsheets/";
const SHEETS_SCOPE: &str = "https://www.googleapis.com/auth/spreadsheets";
const JWT_BEARER_GRANT: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";
const TOKEN_TTL_SECS: u64 = 3600;

/// Google Sheets v4 client authenticating with a service account.
///
/// Every call signs a fresh JWT and exchanges it for an access token, so the
/// client is stateless across requests. At contact form traffic levels the
/// extra token round trip does not matter.
#[derive(Debug, Clone)]
pub struct SheetsApiServiceImpl<Time> {
    config: Arc<SheetsApiServiceConfig>,
    time: Time,
    client: HttpClient,
}

impl<Time> SheetsApiServiceImpl<Time> {
    pub fn new(config: SheetsApiServiceConfig, time: Time, client: HttpClient) -> Self {
        Self {
            config: config.into(),
            time,
            client,
        }
    }

    fn values_url(&self, range: &str) -> anyhow::Result<Url> {
        self.config
            .api_base
            .join(&format!("{}/values/{range}", self.config.spreadsheet_id))
            .context("Failed to build Google Sheets values url")
    }
}

impl<Time> SheetsApiServiceImpl<Time>
where
    Time: TimeService,
{
    async fn access_token(&self) -> anyhow::Result<String> {
        let claims = token_claims(
            &self.config.client_email,
            &self.config.token_endpoint,
            self.time.now(),
        );
        let assertion = jsonwebtoken::encode(
            &Header::new(Algorithm::RS256),
            &claims,
            &self.config.signing_key,
        )
        .context("Failed to sign service account JWT")?;

        self.client
            .post(self.config.token_endpoint.clone())
            .form(&AccessTokenRequest {
                grant_type: JWT_BEARER_GRANT,
                assertion: &assertion,
            })
            .send()
            .await?
            .error_for_status()
            .context("Google OAuth2 token request failed")?
            .json::<AccessTokenResponse>()
            .await
            .map(|response| response.access_token)
            .map_err(Into::into)
    }
}

impl<Time> SheetsApiService for SheetsApiServiceImpl<Time>
where
    Time: TimeService,
{
    async fn append_row(&self, row: SheetRow) -> anyhow::Result<()> {
        let token = self.access_token().await?;
        let url = self.values_url(&format!("{}:append", self.config.worksheet_range))?;
        self.client
            .post(url)
            .query(&[("valueInputOption", "USER_ENTERED")])
            .bearer_auth(token)
            .json(&ValuesBody { values: vec![row] })
            .send()
            .await?
            .error_for_status()
            .context("Google Sheets append request failed")?;
        Ok(())
    }

    async fn write_header(&self) -> anyhow::Result<()> {
        let token = self.access_token().await?;
        let url = self.values_url(&header_range(&self.config.worksheet_range))?;
        let header = SheetRow(SHEET_HEADER.map(String::from));
        self.client
            .put(url)
            .query(&[("valueInputOption", "USER_ENTERED")])
            .bearer_auth(token)
            .json(&ValuesBody {
                values: vec![header],
            })
            .send()
            .await?
            .error_for_status()
            .context("Google Sheets header update request failed")?;
        Ok(())
    }
}

pub struct SheetsApiServiceConfig {
    client_email: String,
    signing_key: EncodingKey,
    spreadsheet_id: String,
    worksheet_range: String,
    token_endpoint: Url,
    api_base: Url,
}

impl SheetsApiServiceConfig {
    pub fn new(
        client_email: String,
        private_key: &str,
        spreadsheet_id: String,
        worksheet_range: String,
        token_endpoint_override: Option<Url>,
        api_base_override: Option<Url>,
    ) -> anyhow::Result<Self> {
        // Keys copied out of the service account JSON usually carry literal
        // `\n` escapes instead of real newlines.
        let pem = private_key.replace("\\n", "\n");
        Ok(Self {
            client_email,
            signing_key: EncodingKey::from_rsa_pem(pem.as_bytes())
                .context("Failed to load service account private key")?,
            spreadsheet_id,
            worksheet_range,
            token_endpoint: token_endpoint_override
                .unwrap_or_else(|| TOKEN_ENDPOINT.parse().unwrap()),
            api_base: api_base_override.unwrap_or_else(|| API_BASE.parse().unwrap()),
        })
    }
}

impl std::fmt::Debug for SheetsApiServiceConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SheetsApiServiceConfig")
            .field("client_email", &self.client_email)
            .field("signing_key", &"[redacted]")
            .field("spreadsheet_id", &self.spreadsheet_id)
            .field("worksheet_range", &self.worksheet_range)
            .field("token_endpoint", &self.token_endpoint)
            .field("api_base", &self.api_base)
            .finish()
    }
}

fn token_claims<'a>(
    client_email: &'a str,
    token_endpoint: &'a Url,
    now: DateTime<Utc>,
) -> AccessTokenClaims<'a> {
    let iat = now.timestamp() as u64;
    AccessTokenClaims {
        iss: client_email,
        scope: SHEETS_SCOPE,
        aud: token_endpoint.as_str(),
        iat,
        exp: iat + TOKEN_TTL_SECS,
    }
}

fn header_range(worksheet_range: &str) -> String {
    let tab = worksheet_range.split('!').next().unwrap_or(worksheet_range);
    format!("{tab}!A1:E1")
}

#[derive(Serialize)]
struct AccessTokenClaims<'a> {
    iss: &'a str,
    scope: &'a str,
    aud: &'a str,
    iat: u64,
    exp: u64,
}

#[derive(Serialize)]
struct AccessTokenRequest<'a> {
    grant_type: &'a str,
    assertion: &'a str,
}

#[derive(Deserialize)]
struct AccessTokenResponse {
    access_token: String,
}

#[derive(Serialize)]
struct ValuesBody {
    values: Vec<SheetRow>,
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn token_claims_expire_one_hour_after_issuing() {
        let now = Utc.with_ymd_and_hms(2024, 3, 9, 14, 5, 0).unwrap();
        let endpoint: Url = "https://oauth2.example.com/token".parse().unwrap();

        let claims = token_claims("contact-form@example.iam.gserviceaccount.com", &endpoint, now);

        assert_eq!(claims.iss, "contact-form@example.iam.gserviceaccount.com");
        assert_eq!(claims.scope, "https://www.googleapis.com/auth/spreadsheets");
        assert_eq!(claims.aud, "https://oauth2.example.com/token");
        assert_eq!(claims.iat, now.timestamp() as u64);
        assert_eq!(claims.exp, claims.iat + 3600);
    }

    #[test]
    fn header_range_keeps_worksheet_tab() {
        assert_eq!(header_range("Sheet1!A:E"), "Sheet1!A1:E1");
        assert_eq!(header_range("Contact Form!A:E"), "Contact Form!A1:E1");
    }

    #[test]
    fn config_rejects_invalid_private_key() {
        let result = SheetsApiServiceConfig::new(
            "contact-form@example-project.iam.gserviceaccount.com".into(),
            "not a pem",
            "spreadsheet".into(),
            "Sheet1!A:E".into(),
            None,
            None,
        );
        assert!(result.is_err());
    }
}
