//! Site configuration: selectors, class names, and mail identifiers.

/// Structural selectors and fixed strings the orchestrator operates on.
///
/// Defaults match the markup roles of the reference page; hosts with
/// different markup override individual fields or use the builder methods.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    // Intro sequence targets
    pub loader_bar: String,
    pub loader_text: String,
    pub loader: String,
    pub hero_title_lines: String,
    pub hero_subtitle: String,
    pub hero_cta: String,

    // Scroll-linked effects
    pub content_sections: String,
    pub reveal_children: String,
    pub hero: String,
    pub hero_bg: String,
    pub decorative_wrapper: String,
    pub decorative_image: String,

    // Navigation
    pub spy_sections: String,
    pub nav_links: String,
    pub active_class: String,

    // Magnetic controls
    pub magnetic_controls: String,
    pub magnetic_label: String,

    // Contact form
    pub form: String,
    pub name_field: String,
    pub email_field: String,
    pub message_field: String,
    pub submit_control: String,
    pub submit_label: String,
    pub status_region: String,
    pub error_region: String,
    pub error_class: String,
    pub success_class: String,
    pub busy_label: String,
    pub success_message: String,
    pub failure_message: String,

    // Outbound mail
    pub mail_service_id: String,
    pub mail_template_id: String,
    pub recipient: String,
}

impl SiteConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Name placed in the `to_name` template slot of every send request.
    pub fn recipient(mut self, recipient: impl Into<String>) -> Self {
        self.recipient = recipient.into();
        self
    }

    /// Delivery service and template identifiers for outbound mail.
    pub fn mail_ids(
        mut self,
        service_id: impl Into<String>,
        template_id: impl Into<String>,
    ) -> Self {
        self.mail_service_id = service_id.into();
        self.mail_template_id = template_id.into();
        self
    }

    pub fn busy_label(mut self, label: impl Into<String>) -> Self {
        self.busy_label = label.into();
        self
    }

    pub fn success_message(mut self, message: impl Into<String>) -> Self {
        self.success_message = message.into();
        self
    }

    pub fn failure_message(mut self, message: impl Into<String>) -> Self {
        self.failure_message = message.into();
        self
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            loader_bar: ".loader-bar".into(),
            loader_text: ".loader-text".into(),
            loader: ".loader".into(),
            hero_title_lines: ".hero-title .line".into(),
            hero_subtitle: ".hero-subtitle".into(),
            hero_cta: ".hero-cta".into(),

            content_sections: ".section".into(),
            reveal_children: ".section-header, .about-content p, .about-image-wrapper, \
                              .skills-grid, .project-card, .timeline-item, .contact-wrapper"
                .into(),
            hero: ".hero".into(),
            hero_bg: ".hero-bg".into(),
            decorative_wrapper: ".about-image-wrapper".into(),
            decorative_image: ".about-image".into(),

            spy_sections: "section, header".into(),
            nav_links: ".nav-link".into(),
            active_class: "active".into(),

            magnetic_controls: ".btn".into(),
            magnetic_label: "span".into(),

            form: "#contact-form".into(),
            name_field: "#name".into(),
            email_field: "#email".into(),
            message_field: "#message".into(),
            submit_control: "#submit-btn".into(),
            submit_label: "span".into(),
            status_region: "#form-status".into(),
            error_region: ".error-message".into(),
            error_class: "error".into(),
            success_class: "success".into(),
            busy_label: "Sending...".into(),
            success_message: "Message sent successfully! I will get back to you soon.".into(),
            failure_message: "Failed to send message. Please try again later or email me directly."
                .into(),

            mail_service_id: String::new(),
            mail_template_id: String::new(),
            recipient: "Site Owner".into(),
        }
    }
}
