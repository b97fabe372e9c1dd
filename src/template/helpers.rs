// ABOUTME: Handlebars helper functions for template rendering
// ABOUTME: Implements the string/collection helper library and the cidrhost network helper

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use chrono::Utc;
use handlebars::{Context, Handlebars, Helper, Output, RenderContext, RenderError};
use std::env;
use uuid::Uuid;

use super::cidr;

/// cidrhost helper - computes the Nth address inside a CIDR block.
///
/// `{{cidrhost "10.0.0.0/24" 5}}` renders `10.0.0.5`; negative indices count
/// back from the end of the block.
pub fn cidrhost_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _rc: &mut RenderContext,
    out: &mut dyn Output,
) -> std::result::Result<(), RenderError> {
    let cidr_text = h
        .param(0)
        .and_then(|v| v.value().as_str())
        .ok_or_else(|| RenderError::new("cidrhost helper requires a CIDR string parameter"))?;

    let index = h
        .param(1)
        .and_then(|v| v.value().as_i64())
        .ok_or_else(|| RenderError::new("cidrhost helper requires a host index parameter"))?;

    let address =
        cidr::host(cidr_text, index).map_err(|e| RenderError::new(e.to_string()))?;

    out.write(&address.to_string())?;
    Ok(())
}

/// Uppercase helper
pub fn upper_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _rc: &mut RenderContext,
    out: &mut dyn Output,
) -> std::result::Result<(), RenderError> {
    let input = h
        .param(0)
        .and_then(|v| v.value().as_str())
        .ok_or_else(|| RenderError::new("upper helper requires input parameter"))?;

    out.write(&input.to_uppercase())?;
    Ok(())
}

/// Lowercase helper
pub fn lower_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _rc: &mut RenderContext,
    out: &mut dyn Output,
) -> std::result::Result<(), RenderError> {
    let input = h
        .param(0)
        .and_then(|v| v.value().as_str())
        .ok_or_else(|| RenderError::new("lower helper requires input parameter"))?;

    out.write(&input.to_lowercase())?;
    Ok(())
}

/// Title-case helper - uppercases the first letter of each word
pub fn title_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _rc: &mut RenderContext,
    out: &mut dyn Output,
) -> std::result::Result<(), RenderError> {
    let input = h
        .param(0)
        .and_then(|v| v.value().as_str())
        .ok_or_else(|| RenderError::new("title helper requires input parameter"))?;

    let titled = input
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                None => String::new(),
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ");

    out.write(&titled)?;
    Ok(())
}

/// Trim helper - strips leading and trailing whitespace
pub fn trim_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _rc: &mut RenderContext,
    out: &mut dyn Output,
) -> std::result::Result<(), RenderError> {
    let input = h
        .param(0)
        .and_then(|v| v.value().as_str())
        .ok_or_else(|| RenderError::new("trim helper requires input parameter"))?;

    out.write(input.trim())?;
    Ok(())
}

/// Replace helper - replaces all occurrences of a substring
pub fn replace_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _rc: &mut RenderContext,
    out: &mut dyn Output,
) -> std::result::Result<(), RenderError> {
    let input = h
        .param(0)
        .and_then(|v| v.value().as_str())
        .ok_or_else(|| RenderError::new("replace helper requires input parameter"))?;

    let from = h
        .param(1)
        .and_then(|v| v.value().as_str())
        .ok_or_else(|| RenderError::new("replace helper requires a search parameter"))?;

    let to = h
        .param(2)
        .and_then(|v| v.value().as_str())
        .ok_or_else(|| RenderError::new("replace helper requires a replacement parameter"))?;

    out.write(&input.replace(from, to))?;
    Ok(())
}

/// Quote helper - wraps the input in double quotes
pub fn quote_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _rc: &mut RenderContext,
    out: &mut dyn Output,
) -> std::result::Result<(), RenderError> {
    let input = h
        .param(0)
        .and_then(|v| v.value().as_str())
        .ok_or_else(|| RenderError::new("quote helper requires input parameter"))?;

    out.write(&format!("\"{}\"", input))?;
    Ok(())
}

/// Join helper - joins array elements with separator
pub fn join_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _rc: &mut RenderContext,
    out: &mut dyn Output,
) -> std::result::Result<(), RenderError> {
    let separator = h.param(0).and_then(|v| v.value().as_str()).unwrap_or(",");

    let array = h
        .param(1)
        .and_then(|v| v.value().as_array())
        .ok_or_else(|| RenderError::new("join helper requires array parameter"))?;

    let strings: std::result::Result<Vec<String>, RenderError> = array
        .iter()
        .map(|v| {
            v.as_str()
                .map(|s| s.to_string())
                .ok_or_else(|| RenderError::new("Array elements must be strings"))
        })
        .collect();

    let joined = strings?.join(separator);
    out.write(&joined)?;
    Ok(())
}

/// Default helper - provides default value if variable is empty
pub fn default_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _rc: &mut RenderContext,
    out: &mut dyn Output,
) -> std::result::Result<(), RenderError> {
    let value = h.param(0).and_then(|v| v.value().as_str()).unwrap_or("");

    let default_value = h
        .param(1)
        .and_then(|v| v.value().as_str())
        .ok_or_else(|| RenderError::new("default helper requires default value parameter"))?;

    let result = if value.is_empty() {
        default_value
    } else {
        value
    };

    out.write(result)?;
    Ok(())
}

/// Environment variable helper - gets environment variable value
pub fn env_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _rc: &mut RenderContext,
    out: &mut dyn Output,
) -> std::result::Result<(), RenderError> {
    let var_name = h
        .param(0)
        .and_then(|v| v.value().as_str())
        .ok_or_else(|| RenderError::new("env helper requires variable name parameter"))?;

    let default_value = h.param(1).and_then(|v| v.value().as_str()).unwrap_or("");

    let value = env::var(var_name).unwrap_or_else(|_| default_value.to_string());
    out.write(&value)?;
    Ok(())
}

/// Base64 encode helper
pub fn base64_encode_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _rc: &mut RenderContext,
    out: &mut dyn Output,
) -> std::result::Result<(), RenderError> {
    let input = h
        .param(0)
        .and_then(|v| v.value().as_str())
        .ok_or_else(|| RenderError::new("base64_encode helper requires input parameter"))?;

    let encoded = BASE64.encode(input.as_bytes());
    out.write(&encoded)?;
    Ok(())
}

/// Base64 decode helper
pub fn base64_decode_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _rc: &mut RenderContext,
    out: &mut dyn Output,
) -> std::result::Result<(), RenderError> {
    let input = h
        .param(0)
        .and_then(|v| v.value().as_str())
        .ok_or_else(|| RenderError::new("base64_decode helper requires input parameter"))?;

    let decoded_bytes = BASE64
        .decode(input)
        .map_err(|e| RenderError::new(format!("Base64 decode error: {}", e)))?;

    let decoded_str = String::from_utf8(decoded_bytes)
        .map_err(|e| RenderError::new(format!("UTF-8 decode error: {}", e)))?;

    out.write(&decoded_str)?;
    Ok(())
}

/// Timestamp helper - formats current time with optional format string
pub fn timestamp_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _rc: &mut RenderContext,
    out: &mut dyn Output,
) -> std::result::Result<(), RenderError> {
    let format = h
        .param(0)
        .and_then(|v| v.value().as_str())
        .unwrap_or("%Y-%m-%d %H:%M:%S");

    let now = Utc::now();
    let formatted = now.format(format).to_string();
    out.write(&formatted)?;
    Ok(())
}

/// UUID helper - generates a new UUID v4
pub fn uuid_helper(
    _h: &Helper,
    _: &Handlebars,
    _: &Context,
    _rc: &mut RenderContext,
    out: &mut dyn Output,
) -> std::result::Result<(), RenderError> {
    let uuid = Uuid::new_v4().to_string();
    out.write(&uuid)?;
    Ok(())
}

/// Register all built-in helpers with a Handlebars instance
pub fn register_helpers(handlebars: &mut Handlebars) {
    handlebars.register_helper("cidrhost", Box::new(cidrhost_helper));
    handlebars.register_helper("upper", Box::new(upper_helper));
    handlebars.register_helper("lower", Box::new(lower_helper));
    handlebars.register_helper("title", Box::new(title_helper));
    handlebars.register_helper("trim", Box::new(trim_helper));
    handlebars.register_helper("replace", Box::new(replace_helper));
    handlebars.register_helper("quote", Box::new(quote_helper));
    handlebars.register_helper("join", Box::new(join_helper));
    handlebars.register_helper("default", Box::new(default_helper));
    handlebars.register_helper("env", Box::new(env_helper));
    handlebars.register_helper("base64_encode", Box::new(base64_encode_helper));
    handlebars.register_helper("base64_decode", Box::new(base64_decode_helper));
    handlebars.register_helper("timestamp", Box::new(timestamp_helper));
    handlebars.register_helper("uuid", Box::new(uuid_helper));
}
