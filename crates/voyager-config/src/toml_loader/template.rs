//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# Voyager Configuration
# Only override what you want to change -- missing fields use defaults.

[wiki]
# endpoint = "https://en.wikivoyage.org/w/api.php"
# result_limit = 5           # 1-5
# timeout_secs = 15          # 1-300

[llm]
# api_base = "https://generativelanguage.googleapis.com/v1beta"
# model = "gemini-2.0-flash-001"   # caching needs a versioned model
# max_tokens = 4096          # 1-65536
# temperature = 0.7          # 0.0-2.0
# cache_threshold_tokens = 40000
# cache_ttl_secs = 300       # 60-86400
# timeout_secs = 120         # 1-600

[credentials]
# path = "/path/to/credentials.json"
# max_attempts = 3           # 1-10

[logging]
# level = "voyager=warn"
"##
    .to_string()
}
