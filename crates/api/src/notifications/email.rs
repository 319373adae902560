//! Email delivery of adoption-request notifications via SMTP.
//!
//! [`EmailNotifier`] wraps the `lettre` async SMTP transport to send a
//! plain-text summary of each accepted adoption request to the shelter's
//! inbox. Configuration is loaded from environment variables; if
//! `SMTP_HOST` is not set, [`EmailConfig::from_env`] returns `None` and no
//! notifier should be constructed.

use async_trait::async_trait;
use refugio_core::adoption::AdoptionRequest;
use refugio_db::models::animal::Animal;

use super::{Notifier, NotifyError};

/// Default SMTP port (STARTTLS).
const DEFAULT_SMTP_PORT: u16 = 587;

/// Default sender address when `SMTP_FROM` is not set.
const DEFAULT_FROM_ADDRESS: &str = "noreply@refugio.local";

/// Configuration for the SMTP notifier.
#[derive(Debug, Clone)]
pub struct EmailConfig {
    /// SMTP server hostname.
    pub smtp_host: String,
    /// SMTP server port (defaults to 587).
    pub smtp_port: u16,
    /// RFC 5322 "From" address.
    pub from_address: String,
    /// Shelter inbox that receives adoption-request notifications.
    pub to_address: String,
    /// Optional SMTP username.
    pub smtp_user: Option<String>,
    /// Optional SMTP password.
    pub smtp_password: Option<String>,
}

impl EmailConfig {
    /// Load configuration from environment variables.
    ///
    /// Returns `None` if `SMTP_HOST` or `SMTP_TO` is not set, signalling
    /// that email delivery is not configured and should be skipped.
    ///
    /// | Variable        | Required | Default                 |
    /// |-----------------|----------|-------------------------|
    /// | `SMTP_HOST`     | yes      | --                      |
    /// | `SMTP_TO`       | yes      | --                      |
    /// | `SMTP_PORT`     | no       | `587`                   |
    /// | `SMTP_FROM`     | no       | `noreply@refugio.local` |
    /// | `SMTP_USER`     | no       | --                      |
    /// | `SMTP_PASSWORD` | no       | --                      |
    pub fn from_env() -> Option<Self> {
        let smtp_host = std::env::var("SMTP_HOST").ok()?;
        let to_address = std::env::var("SMTP_TO").ok()?;
        Some(Self {
            smtp_host,
            smtp_port: std::env::var("SMTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_SMTP_PORT),
            from_address: std::env::var("SMTP_FROM")
                .unwrap_or_else(|_| DEFAULT_FROM_ADDRESS.to_string()),
            to_address,
            smtp_user: std::env::var("SMTP_USER").ok(),
            smtp_password: std::env::var("SMTP_PASSWORD").ok(),
        })
    }
}

/// Sends adoption-request notification emails via SMTP.
pub struct EmailNotifier {
    config: EmailConfig,
}

impl EmailNotifier {
    /// Create a new email notifier with the given configuration.
    pub fn new(config: EmailConfig) -> Self {
        Self { config }
    }
}

/// Render the plain-text notification body.
fn render_body(request: &AdoptionRequest, animal: &Animal) -> String {
    format!(
        "Nueva solicitud de adopción:\n\n\
         Animal: {} (ID: {})\n\
         Solicitante: {} {}\n\
         Email: {}\n\
         Teléfono: {}\n\
         Dirección: {}\n\
         Experiencia: {}\n\
         Motivación: {}\n\
         Otros animales: {}\n\
         Espacio vivienda: {}\n",
        animal.nombre,
        animal.id,
        request.nombre,
        request.apellidos,
        request.email,
        request.telefono,
        request.direccion,
        request.experiencia.as_deref().unwrap_or("No especificada"),
        request.motivacion,
        if request.otros_animales { "Sí" } else { "No" },
        request.espacio_vivienda,
    )
}

#[async_trait]
impl Notifier for EmailNotifier {
    async fn adoption_request(
        &self,
        request: &AdoptionRequest,
        animal: &Animal,
    ) -> Result<(), NotifyError> {
        use lettre::{
            message::header::ContentType, transport::smtp::authentication::Credentials,
            AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
        };

        let subject = format!("Nueva solicitud de adopción para {}", animal.nombre);
        let body = render_body(request, animal);

        let email = Message::builder()
            .from(self.config.from_address.parse()?)
            .to(self.config.to_address.parse()?)
            .reply_to(request.email.parse()?)
            .subject(subject)
            .header(ContentType::TEXT_PLAIN)
            .body(body)
            .map_err(|e| NotifyError::Build(e.to_string()))?;

        let mut transport_builder =
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&self.config.smtp_host)?
                .port(self.config.smtp_port);

        if let (Some(user), Some(pass)) = (&self.config.smtp_user, &self.config.smtp_password) {
            transport_builder =
                transport_builder.credentials(Credentials::new(user.clone(), pass.clone()));
        }

        let mailer = transport_builder.build();
        mailer.send(email).await?;

        tracing::info!(animal_id = animal.id, "Adoption request notification sent");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use refugio_db::models::animal::{AnimalStatus, Sex, Size, Species};

    fn sample_animal() -> Animal {
        Animal {
            id: 7,
            nombre: "Luna".to_string(),
            tipo_animal: Species::Perro,
            raza: "Mestizo".to_string(),
            edad: 3,
            tamano: Size::Mediano,
            sexo: Some(Sex::Hembra),
            descripcion: String::new(),
            problemas_fisicos: String::new(),
            problemas_comportamiento: String::new(),
            estado: AnimalStatus::Disponible,
            fecha_ingreso: None,
            fecha_adopcion: None,
            esterilizado: true,
            vacunado: true,
            chip: false,
            foto_principal: None,
            urgente: false,
            visible: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn sample_request() -> AdoptionRequest {
        AdoptionRequest {
            animal_id: 7,
            nombre: "Ane".to_string(),
            apellidos: "Etxeberria".to_string(),
            email: "ane@example.com".to_string(),
            telefono: "600123456".to_string(),
            direccion: "Calle Mayor 1".to_string(),
            experiencia: None,
            motivacion: "Quiero darle un hogar.".to_string(),
            otros_animales: true,
            espacio_vivienda: "Piso con terraza".to_string(),
        }
    }

    #[test]
    fn body_includes_animal_and_applicant() {
        let body = render_body(&sample_request(), &sample_animal());
        assert!(body.contains("Luna"));
        assert!(body.contains("Ane Etxeberria"));
        assert!(body.contains("Experiencia: No especificada"));
        assert!(body.contains("Otros animales: Sí"));
    }

    #[test]
    fn from_env_returns_none_without_smtp_host() {
        std::env::remove_var("SMTP_HOST");
        assert!(EmailConfig::from_env().is_none());
    }
}
