/// Config sections that can be overridden through `GOVPRO_<SECTION>__<KEY>`.
const SECTIONS: [&str; 4] = ["GENERAL", "NOTIFICATIONS", "AI", "CONNECTORS"];

/// Warn about `GOVPRO_*` variables that figment will silently ignore.
pub fn warn_misnamed_env() {
    for warning in collect_env_warnings(std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_env_warnings<I>(env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();

    SECTIONS
        .iter()
        .filter_map(|section| {
            let single = format!("GOVPRO_{section}_");
            let double = format!("GOVPRO_{section}__");
            env_keys
                .iter()
                .find(|key| key.starts_with(&single) && !key.starts_with(&double))
                .map(|key| {
                    let lower = section.to_ascii_lowercase();
                    format!(
                        "{key} is ignored. Use double underscores between section and key (example: GOVPRO_{section}__<KEY> for [{lower}])."
                    )
                })
        })
        .collect()
}
