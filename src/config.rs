use dotenvy::dotenv;
use std::env;

#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub server_addr: String,

    // SMS gateway (Twilio-compatible)
    pub sms_base_url: String,
    pub sms_account_sid: String,
    pub sms_auth_token: String,
    pub sms_from_number: String,
    pub sms_country_prefix: String,

    // Rate limiting
    pub rate_api_per_min: u32,

    pub api_prefix: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        Self {
            server_addr: env::var("SERVER_ADDR").expect("SERVER_ADDR must be set"),
            database_url: env::var("DATABASE_URL").expect("DATABASE_URL must be set"),

            sms_base_url: env::var("SMS_BASE_URL")
                .unwrap_or_else(|_| "https://api.twilio.com".to_string()),
            sms_account_sid: env::var("SMS_ACCOUNT_SID").unwrap_or_default(),
            sms_auth_token: env::var("SMS_AUTH_TOKEN").unwrap_or_default(),
            sms_from_number: env::var("SMS_FROM_NUMBER").unwrap_or_default(),
            sms_country_prefix: env::var("SMS_COUNTRY_PREFIX")
                .unwrap_or_else(|_| "+91".to_string()),

            rate_api_per_min: env::var("RATE_API_PER_MIN")
                .unwrap_or_else(|_| "600".to_string())
                .parse()
                .unwrap(),

            api_prefix: env::var("API_PREFIX").unwrap_or_else(|_| "/api".to_string()),
        }
    }
}
