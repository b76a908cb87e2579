use axum::response::Html;
use rust_embed::RustEmbed;
use std::sync::OnceLock;
use vestibule_error::Result;

static ENVIRONMENT: OnceLock<minijinja::Environment<'static>> = OnceLock::new();

#[derive(RustEmbed)]
#[folder = "templates"]
struct TemplateDir;

fn embed_loader(path: &str) -> Result<Option<String>, minijinja::Error> {
    let maybe_data = TemplateDir::get(path).map(|embedded_file| embedded_file.data);
    let maybe_template = maybe_data
        .map(|data| simdutf8::basic::from_utf8(&data).map(ToString::to_string))
        .transpose()
        .map_err(|error| {
            minijinja::Error::new(minijinja::ErrorKind::CannotDeserialize, error.to_string())
        })?;

    Ok(maybe_template)
}

fn init_environment() -> minijinja::Environment<'static> {
    let mut environment = minijinja::Environment::new();
    environment.set_loader(embed_loader);
    environment
}

/// Render an embedded template
///
/// Templates ending in `.html` are auto-escaped.
pub fn render<S>(name: &str, ctx: S) -> Result<Html<String>>
where
    S: serde::Serialize,
{
    let environment = ENVIRONMENT.get_or_init(init_environment);
    let template = environment
        .get_template(name)
        .inspect_err(|error| error!(?error, "failed to get template"))?;

    Ok(Html(template.render(ctx)?))
}
