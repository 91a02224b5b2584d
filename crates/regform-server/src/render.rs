// File: src/render.rs
// Purpose: Maud markup for the registration page

use crate::config::FormConfig;
use maud::{html, Markup, PreEscaped, DOCTYPE};
use regform::{FieldDescriptor, RegistrationForm, FIELDS};

const STYLE: &str = r#"
body { display:flex; min-height:100vh; align-items:center; justify-content:center;
       background:#282c34; color:#fff; font-family:system-ui, sans-serif; margin:0; padding:0 1rem; }
form { width:100%; max-width:28rem; background:#1f2937; padding:2rem; border-radius:1rem; }
h1 { text-align:center; }
.field { margin-bottom:1rem; }
.input { box-sizing:border-box; width:100%; padding:.75rem; border-radius:.75rem;
         border:1px solid #374151; background:#111827; color:#fff; }
.input:focus { border-color:#3b82f6; outline:none; }
.input.invalid { border-color:#ef4444; }
.error { color:#f87171; font-size:.875rem; margin-top:.25rem; }
.actions { display:flex; gap:.5rem; }
.actions button { width:100%; padding:.75rem; border:0; border-radius:.75rem; color:#fff; cursor:pointer; }
.submit { background:#2563eb; }
.submit:disabled { background:#374151; cursor:not-allowed; }
.reset { background:#ef4444; }
.toast { background:#16a34a; padding:.75rem; border-radius:.75rem; margin-bottom:1rem; }
"#;

// Posts the record to /validate on every input and updates the changed
// field's error plus the submit button, mirroring on-change validation.
const SCRIPT: &str = r#"
(() => {
  const form = document.getElementById('registration');
  const submit = form.querySelector('button[type=submit]');
  const record = () => Object.fromEntries(
    [...form.querySelectorAll('input')].map(i => [i.name, i.type === 'number' && i.value === '' ? null : i.value]));
  const show = (input, error) => {
    const id = input.name + '-error';
    let p = document.getElementById(id);
    input.classList.toggle('invalid', !!error);
    if (error) {
      input.setAttribute('aria-invalid', 'true');
      input.setAttribute('aria-errormessage', id);
      if (!p) { p = document.createElement('p'); p.id = id; p.className = 'error'; input.after(p); }
      p.textContent = error.message;
    } else {
      input.removeAttribute('aria-invalid');
      input.removeAttribute('aria-errormessage');
      if (p) p.remove();
    }
  };
  form.addEventListener('input', async (event) => {
    const res = await fetch('/validate', {
      method: 'POST', headers: { 'content-type': 'application/json' }, body: JSON.stringify(record()) });
    const { values, errors } = await res.json();
    show(event.target, errors[event.target.name]);
    submit.disabled = values === null;
  });
  // Reset returns to empty defaults, not to the last server-rendered values
  form.addEventListener('reset', () => {
    form.querySelectorAll('input').forEach(i => { i.defaultValue = ''; i.value = ''; show(i, null); });
    submit.disabled = true;
  });
})();
"#;

fn input_class(invalid: bool) -> &'static str {
    if invalid {
        "input invalid"
    } else {
        "input"
    }
}

/// Password inputs are never echoed back into the page
fn display_value(field: &FieldDescriptor, form: &RegistrationForm) -> Option<String> {
    if field.input_type == "password" {
        return None;
    }
    let value = form.value(field.name).to_display();
    (!value.is_empty()).then_some(value)
}

fn field(field: &FieldDescriptor, form: &RegistrationForm) -> Markup {
    let attrs = field.attrs(form.errors());
    html! {
        div class="field" {
            input
                type=(field.input_type)
                name=(field.name)
                placeholder=(field.placeholder)
                autofocus[attrs.contains("autofocus")]
                aria-invalid=[attrs.get("aria-invalid")]
                aria-errormessage=[attrs.get("aria-errormessage")]
                value=[display_value(field, form)]
                class=(input_class(attrs.is_invalid()));
            @if let Some(error) = form.error(field.name) {
                p id=(field.error_id()) class="error" { (error.message) }
            }
        }
    }
}

/// Full registration page.
///
/// `notice` is the success message after an accepted submit.
pub fn page(config: &FormConfig, form: &RegistrationForm, notice: Option<&str>) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (config.title) }
                style { (PreEscaped(STYLE)) }
            }
            body {
                form id="registration" method="post" action="/" novalidate {
                    h1 { (config.title) }
                    @if let Some(notice) = notice {
                        div class="toast" role="status" { (notice) }
                    }
                    @for descriptor in &FIELDS {
                        (field(descriptor, form))
                    }
                    div class="actions" {
                        button type="submit" class="submit" disabled[!form.is_valid()] { "Submit" }
                        button type="reset" class="reset" { "Reset" }
                    }
                }
                script { (PreEscaped(SCRIPT)) }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use regform::registration::{AGE, CONFIRM_PASSWORD, EMAIL, FULL_NAME, PASSWORD};

    #[test]
    fn test_fresh_page_has_every_field_and_no_errors() {
        let form = RegistrationForm::registration();
        let html = page(&FormConfig::default(), &form, None).into_string();

        for descriptor in &FIELDS {
            assert!(html.contains(&format!("name=\"{}\"", descriptor.name)));
            assert!(html.contains(&format!("placeholder=\"{}\"", descriptor.placeholder)));
        }
        assert!(html.contains("<h1>Form Validation</h1>"));
        assert!(!html.contains("aria-invalid=\"true\""));
        assert!(!html.contains("role=\"status\""));
        assert!(html.contains("<button type=\"submit\" class=\"submit\" disabled>"));
    }

    #[test]
    fn test_submit_enabled_once_valid() {
        let mut form = RegistrationForm::registration();
        form.set_value(FULL_NAME, "Yuri Mutti").unwrap();
        form.set_value(EMAIL, "yuri@mutti.com").unwrap();
        form.set_value(PASSWORD, "Password@123").unwrap();
        form.set_value(CONFIRM_PASSWORD, "Password@123").unwrap();
        form.set_value(AGE, 25).unwrap();
        assert!(form.is_valid());

        let html = page(&FormConfig::default(), &form, None).into_string();
        assert!(html.contains("<button type=\"submit\" class=\"submit\">"));
    }

    #[test]
    fn test_reset_clears_rendered_defaults() {
        let html = page(&FormConfig::default(), &RegistrationForm::registration(), None)
            .into_string();
        assert!(html.contains("i.defaultValue = ''"));
    }

    #[test]
    fn test_errors_render_inline_with_aria() {
        let mut form = RegistrationForm::registration();
        form.set_value(FULL_NAME, "Yu").unwrap();
        form.validate();

        let html = page(&FormConfig::default(), &form, None).into_string();

        assert!(html.contains("aria-errormessage=\"fullName-error\""));
        assert!(html.contains("id=\"fullName-error\""));
        assert!(html.contains("Full Name must be at least 3 characters"));
        assert!(html.contains("value=\"Yu\""));
    }

    #[test]
    fn test_password_is_not_echoed() {
        let mut form = RegistrationForm::registration();
        form.set_value(PASSWORD, "secret-123").unwrap();
        form.set_value(EMAIL, "yuri@mutti.com").unwrap();

        let html = page(&FormConfig::default(), &form, None).into_string();

        assert!(!html.contains("secret-123"));
        assert!(html.contains("value=\"yuri@mutti.com\""));
    }

    #[test]
    fn test_notice_renders_as_status() {
        let form = RegistrationForm::registration();
        let html = page(&FormConfig::default(), &form, Some("Form submitted successfully!"))
            .into_string();
        assert!(html.contains("role=\"status\""));
        assert!(html.contains("Form submitted successfully!"));
    }
}
