use log::{error, info};
use serde::Serialize;

use crate::profile;

/// Values of the contact form. Every field is required.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
	pub name: String,
	pub email: String,
	pub subject: String,
	pub message: String,
}

impl ContactForm {
	/// First required field that is blank, in form order.
	pub fn missing_field(&self) -> Option<&'static str> {
		[
			("name", &self.name),
			("email", &self.email),
			("subject", &self.subject),
			("message", &self.message),
		]
		.into_iter()
		.find(|(_, value)| value.trim().is_empty())
		.map(|(field, _)| field)
	}
}

#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
	#[error("required field `{0}` is empty")]
	MissingField(&'static str),

	#[error("could not encode request: {0}")]
	Encode(#[from] serde_json::Error),

	#[error("transport error: {0}")]
	Transport(String),

	#[error("endpoint answered with status {0}")]
	Status(u16),

	#[error("every delivery method failed")]
	Exhausted,
}

/// Which tier of the fallback chain accepted the message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Delivery {
	/// EmailJS API.
	Primary,
	/// Formspree form endpoint.
	Backup,
	/// Handed to the visitor's mail client via `mailto:`.
	MailClient,
}

/// Endpoints and identifiers of the delivery tiers.
#[derive(Clone, Debug)]
pub struct ContactConfig {
	pub emailjs_endpoint: &'static str,
	pub service_id: &'static str,
	pub template_id: &'static str,
	pub user_id: &'static str,
	pub formspree_endpoint: &'static str,
	pub recipient: &'static str,
	/// Subject used in the `mailto:` link when the form subject is blank.
	pub fallback_subject: &'static str,
}

impl Default for ContactConfig {
	/// EmailJS identifiers can be overridden at build time through
	/// `EMAILJS_SERVICE_ID`, `EMAILJS_TEMPLATE_ID` and `EMAILJS_USER_ID`.
	fn default() -> Self {
		Self {
			emailjs_endpoint: "https://api.emailjs.com/api/v1.0/email/send",
			service_id: option_env!("EMAILJS_SERVICE_ID").unwrap_or("service_portfolio"),
			template_id: option_env!("EMAILJS_TEMPLATE_ID").unwrap_or("template_contact"),
			user_id: option_env!("EMAILJS_USER_ID").unwrap_or("your_emailjs_user_id"),
			formspree_endpoint: "https://formspree.io/f/kiranrakh155@gmail.com",
			recipient: profile::EMAIL,
			fallback_subject: "Portfolio Contact - DevOps Opportunity",
		}
	}
}

/// The outbound side of the contact form.
#[allow(async_fn_in_trait)]
pub trait MailTransport {
	/// POST `body` as `application/json`; any non-2xx answer is an error.
	async fn post_json(&self, url: &str, body: String) -> Result<(), SubmitError>;

	/// Navigate the browser to a `mailto:` link.
	fn open_mail_client(&self, href: &str) -> Result<(), SubmitError>;
}

#[derive(Serialize)]
struct EmailJsRequest<'a> {
	service_id: &'a str,
	template_id: &'a str,
	user_id: &'a str,
	template_params: TemplateParams<'a>,
}

#[derive(Serialize)]
struct TemplateParams<'a> {
	from_name: &'a str,
	from_email: &'a str,
	subject: &'a str,
	message: &'a str,
	to_email: &'a str,
}

#[derive(Serialize)]
struct FormspreeRequest<'a> {
	name: &'a str,
	email: &'a str,
	subject: &'a str,
	message: &'a str,
	#[serde(rename = "_replyto")]
	reply_to: &'a str,
}

fn emailjs_body(config: &ContactConfig, form: &ContactForm) -> Result<String, SubmitError> {
	Ok(serde_json::to_string(&EmailJsRequest {
		service_id: config.service_id,
		template_id: config.template_id,
		user_id: config.user_id,
		template_params: TemplateParams {
			from_name: &form.name,
			from_email: &form.email,
			subject: &form.subject,
			message: &form.message,
			to_email: config.recipient,
		},
	})?)
}

fn formspree_body(form: &ContactForm) -> Result<String, SubmitError> {
	Ok(serde_json::to_string(&FormspreeRequest {
		name: &form.name,
		email: &form.email,
		subject: &form.subject,
		message: &form.message,
		reply_to: &form.email,
	})?)
}

/// Percent-encode for a URI component, with spaces as `%20` rather than `+`.
fn encode_component(value: &str) -> String {
	url::form_urlencoded::byte_serialize(value.as_bytes())
		.collect::<String>()
		.replace('+', "%20")
}

/// `mailto:` link carrying the whole form as a prefilled letter.
pub fn mailto_link(config: &ContactConfig, form: &ContactForm) -> String {
	let subject = if form.subject.trim().is_empty() {
		config.fallback_subject
	} else {
		form.subject.as_str()
	};
	let body = format!(
		"Dear {owner},\n\n\
		I am reaching out regarding your DevOps portfolio.\n\n\
		Contact Details:\n\
		Name: {name}\n\
		Email: {email}\n\
		Subject: {subject}\n\n\
		Message:\n\
		{message}\n\n\
		Best regards,\n\
		{name}\n\n\
		---\n\
		This message was sent from your portfolio website contact form.",
		owner = profile::OWNER_FIRST_NAME,
		name = form.name,
		email = form.email,
		subject = form.subject,
		message = form.message,
	);
	format!(
		"mailto:{}?subject={}&body={}",
		config.recipient,
		encode_component(subject),
		encode_component(&body)
	)
}

/// Deliver `form` through the first tier that accepts it: EmailJS, then
/// Formspree, then the visitor's own mail client.
pub async fn submit<T: MailTransport>(
	transport: &T,
	config: &ContactConfig,
	form: &ContactForm,
) -> Result<Delivery, SubmitError> {
	if let Some(field) = form.missing_field() {
		return Err(SubmitError::MissingField(field));
	}

	match transport
		.post_json(config.emailjs_endpoint, emailjs_body(config, form)?)
		.await
	{
		Ok(()) => {
			info!("contact message sent via primary service");
			return Ok(Delivery::Primary);
		}
		Err(e) => error!("primary mail service failed: {e}"),
	}

	match transport
		.post_json(config.formspree_endpoint, formspree_body(form)?)
		.await
	{
		Ok(()) => {
			info!("contact message sent via backup service");
			return Ok(Delivery::Backup);
		}
		Err(e) => error!("backup mail service failed: {e}"),
	}

	match transport.open_mail_client(&mailto_link(config, form)) {
		Ok(()) => {
			info!("contact message handed to mail client");
			Ok(Delivery::MailClient)
		}
		Err(e) => {
			error!("mail client handoff failed: {e}");
			Err(SubmitError::Exhausted)
		}
	}
}

#[cfg(test)]
mod tests {
	use std::cell::RefCell;

	use futures::executor::block_on;

	use super::*;

	/// Answers each tier from a script and records what it was asked to do.
	#[derive(Default)]
	struct ScriptedTransport {
		primary_ok: bool,
		backup_ok: bool,
		mail_ok: bool,
		posts: RefCell<Vec<(String, serde_json::Value)>>,
		opened: RefCell<Vec<String>>,
	}

	impl MailTransport for ScriptedTransport {
		async fn post_json(&self, url: &str, body: String) -> Result<(), SubmitError> {
			let json: serde_json::Value = serde_json::from_str(&body)?;
			self.posts.borrow_mut().push((url.to_string(), json));
			let ok = if url.contains("emailjs") {
				self.primary_ok
			} else {
				self.backup_ok
			};
			if ok { Ok(()) } else { Err(SubmitError::Status(500)) }
		}

		fn open_mail_client(&self, href: &str) -> Result<(), SubmitError> {
			self.opened.borrow_mut().push(href.to_string());
			if self.mail_ok {
				Ok(())
			} else {
				Err(SubmitError::Transport("blocked".into()))
			}
		}
	}

	fn filled() -> ContactForm {
		ContactForm {
			name: "Ada Lovelace".into(),
			email: "ada@example.com".into(),
			subject: "Role & team".into(),
			message: "Hello there".into(),
		}
	}

	#[test]
	fn primary_success_short_circuits() {
		let transport = ScriptedTransport {
			primary_ok: true,
			..Default::default()
		};
		let delivery = block_on(submit(&transport, &ContactConfig::default(), &filled())).unwrap();
		assert_eq!(delivery, Delivery::Primary);

		let posts = transport.posts.borrow();
		assert_eq!(posts.len(), 1);
		let (url, body) = &posts[0];
		assert_eq!(url, "https://api.emailjs.com/api/v1.0/email/send");
		assert_eq!(body["service_id"], "service_portfolio");
		assert_eq!(body["template_params"]["from_name"], "Ada Lovelace");
		assert_eq!(body["template_params"]["to_email"], profile::EMAIL);
		assert!(transport.opened.borrow().is_empty());
	}

	#[test]
	fn primary_failure_falls_back_to_backup() {
		let transport = ScriptedTransport {
			backup_ok: true,
			..Default::default()
		};
		let delivery = block_on(submit(&transport, &ContactConfig::default(), &filled())).unwrap();
		assert_eq!(delivery, Delivery::Backup);

		let posts = transport.posts.borrow();
		assert_eq!(posts.len(), 2);
		let (url, body) = &posts[1];
		assert!(url.starts_with("https://formspree.io/"));
		assert_eq!(body["_replyto"], "ada@example.com");
		assert_eq!(body["message"], "Hello there");
		assert!(transport.opened.borrow().is_empty());
	}

	#[test]
	fn both_services_down_hands_off_to_mail_client() {
		let transport = ScriptedTransport {
			mail_ok: true,
			..Default::default()
		};
		let delivery = block_on(submit(&transport, &ContactConfig::default(), &filled())).unwrap();
		assert_eq!(delivery, Delivery::MailClient);
		assert_eq!(transport.posts.borrow().len(), 2);

		let opened = transport.opened.borrow();
		assert_eq!(opened.len(), 1);
		assert!(opened[0].starts_with("mailto:kiranrakh155@gmail.com?subject=Role%20%26%20team&body="));
	}

	#[test]
	fn every_tier_failing_is_exhausted() {
		let transport = ScriptedTransport::default();
		let err = block_on(submit(&transport, &ContactConfig::default(), &filled())).unwrap_err();
		assert!(matches!(err, SubmitError::Exhausted));
		assert_eq!(transport.opened.borrow().len(), 1);
	}

	#[test]
	fn blank_field_never_reaches_transport() {
		let transport = ScriptedTransport {
			primary_ok: true,
			..Default::default()
		};
		let form = ContactForm {
			subject: "   ".into(),
			..filled()
		};
		let err = block_on(submit(&transport, &ContactConfig::default(), &form)).unwrap_err();
		assert!(matches!(err, SubmitError::MissingField("subject")));
		assert!(transport.posts.borrow().is_empty());
		assert!(transport.opened.borrow().is_empty());
	}

	#[test]
	fn missing_field_reports_first_blank_in_order() {
		assert_eq!(ContactForm::default().missing_field(), Some("name"));
		let form = ContactForm {
			message: String::new(),
			..filled()
		};
		assert_eq!(form.missing_field(), Some("message"));
		assert_eq!(filled().missing_field(), None);
	}

	#[test]
	fn mailto_encodes_spaces_and_newlines() {
		let link = mailto_link(&ContactConfig::default(), &filled());
		let (head, body) = link.split_once("&body=").unwrap();
		assert_eq!(
			head,
			"mailto:kiranrakh155@gmail.com?subject=Role%20%26%20team"
		);
		assert!(body.starts_with("Dear%20Kiran%2C%0A%0AI%20am%20reaching"));
		assert!(body.contains("Name%3A%20Ada%20Lovelace%0A"));
		assert!(!body.contains('+') && !body.contains(' '));
	}

	#[test]
	fn mailto_uses_fallback_subject_when_blank() {
		let form = ContactForm {
			subject: String::new(),
			..filled()
		};
		let link = mailto_link(&ContactConfig::default(), &form);
		assert!(link.contains("?subject=Portfolio%20Contact%20-%20DevOps%20Opportunity&"));
	}

	#[test]
	fn error_messages_are_readable() {
		assert_eq!(
			SubmitError::MissingField("email").to_string(),
			"required field `email` is empty"
		);
		assert_eq!(
			SubmitError::Status(404).to_string(),
			"endpoint answered with status 404"
		);
	}
}
