// CoWin public appointment lookup endpoint
pub const FIND_BY_PIN_URL: &str =
    "https://cdn-api.co-vin.in/api/v2/appointment/sessions/public/findByPin";

// Fixed request headers
pub const ACCEPT_VALUE: &str = "application/json";
pub const ACCEPT_LANGUAGE_VALUE: &str = "hi_IN";

// Query parameter names
pub const PARAM_PINCODE: &str = "pincode";
pub const PARAM_DATE: &str = "date";
