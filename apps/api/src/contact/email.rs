use crate::config::DeliveryCredentials;
use crate::contact::sanitize::{escape_html, escape_html_multiline};
use crate::contact::validation::ContactSubmission;
use crate::email_client::OutboundEmail;

/// Builds the notification email for a validated submission.
///
/// The subject, reply-to and plain-text body use the raw fields; only the HTML
/// body is escaped.
pub fn compose_email(
    submission: &ContactSubmission,
    creds: &DeliveryCredentials<'_>,
) -> OutboundEmail {
    let ContactSubmission {
        name,
        email,
        message,
    } = submission;

    OutboundEmail {
        from: creds.from_email.to_string(),
        to: vec![creds.to_email.to_string()],
        reply_to: email.clone(),
        subject: format!("New Portfolio Message from {name}"),
        html: render_html(
            &escape_html(name),
            &escape_html(email),
            &escape_html_multiline(message),
        ),
        text: format!(
            "New Contact Form Submission\n\nName: {name}\nEmail: {email}\n\nMessage:\n{message}"
        ),
    }
}

fn render_html(safe_name: &str, safe_email: &str, safe_message: &str) -> String {
    format!(
        r#"
        <div style="font-family: Arial, sans-serif; line-height: 1.5;">
          <h2>New Contact Form Submission</h2>
          <p><strong>Name:</strong> {safe_name}</p>
          <p><strong>Email:</strong> {safe_email}</p>
          <p><strong>Message:</strong><br/>{safe_message}</p>
        </div>
      "#
    )
}
