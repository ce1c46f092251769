/// NCI Clinical Trials API endpoint queried for each NCT ID
pub const NCI_CT_API_URL: &str = "https://clinicaltrialsapi.cancer.gov/v1/clinical-trials";
/// Query parameter carrying the NCT ID
pub const NCT_ID_PARAM: &str = "nct_id";
/// Top-level response field holding the matching trials
pub const TRIALS_KEY: &str = "trials";
/// Every NCT ID starts with these characters (compared case-insensitively)
pub const NCT_PREFIX: &str = "NCT";
/// Extension of the CTML files written for each trial
pub const CTML_EXTENSION: &str = "yml";
/// Pause before the single retry of a failed request
pub const RETRY_DELAY_MS: u64 = 1000;

/// Environment variable overriding the API endpoint
pub const API_URL_ENV: &str = "NCI_CT_API_URL";
/// Environment variable overriding the retry delay, in milliseconds
pub const RETRY_DELAY_ENV: &str = "NCI_CT_RETRY_DELAY_MS";
