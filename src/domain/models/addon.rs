//! Declarative add-on rules.
//!
//! Each add-on pairs a detection condition on the environment with the
//! configuration keys it derives. Mutually exclusive groups (broker, mail,
//! document store) are ordered detection tables; the first match wins.

use serde::Serialize;
use std::fmt;

use super::config_value::ConfigValue;
use super::environment::EnvironmentSnapshot;
use super::names::{env, keys};

/// A verbatim copy from one environment variable to one configuration key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Passthrough {
    /// Source environment variable
    pub source: &'static str,
    /// Destination configuration key
    pub key: &'static str,
}

impl Passthrough {
    const fn new(source: &'static str, key: &'static str) -> Self {
        Self { source, key }
    }
}

/// Core passthroughs, applied unconditionally at the start of resolution.
pub const CORE_PASSTHROUGHS: &[Passthrough] = &[
    Passthrough::new(env::SECRET_KEY, keys::SECRET_KEY),
    Passthrough::new(env::DATABASE_URL, keys::SQLALCHEMY_DATABASE_URI),
    Passthrough::new(env::SENTRY_DSN, keys::SENTRY_DSN),
    Passthrough::new(env::EXCEPTIONAL_API_KEY, keys::EXCEPTIONAL_API_KEY),
    Passthrough::new(env::GOOGLE_DOMAIN, keys::GOOGLE_DOMAIN),
];

/// Object-cache (MemCachier) passthroughs, applied unconditionally at the end.
pub const OBJECT_CACHE_PASSTHROUGHS: &[Passthrough] = &[
    Passthrough::new(env::MEMCACHIER_SERVERS, keys::CACHE_MEMCACHED_SERVERS),
    Passthrough::new(env::MEMCACHIER_USERNAME, keys::CACHE_MEMCACHED_USERNAME),
    Passthrough::new(env::MEMCACHIER_PASSWORD, keys::CACHE_MEMCACHED_PASSWORD),
];

/// Key-value cache sources, in claim order.
pub const CACHE_SOURCES: [&str; 2] = [env::REDIS_URL, env::REDISTOGO_URL];

/// Document-store add-on variables, in reporting order.
pub const DOCUMENT_STORE_SOURCES: [&str; 3] =
    [env::MONGOLAB_URI, env::MONGOHQ_URL, env::MONGODB_URI];

/// Message broker add-on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Broker {
    /// CloudAMQP / RabbitMQ
    RabbitMq,
    /// RedisCloud used as a Celery-style broker
    RedisCloud,
}

impl Broker {
    /// Detection order; the first present variable wins.
    pub const DETECTION_ORDER: [Self; 2] = [Self::RabbitMq, Self::RedisCloud];

    /// Variable whose presence selects this broker.
    pub const fn source_var(self) -> &'static str {
        match self {
            Self::RabbitMq => env::RABBITMQ_URL,
            Self::RedisCloud => env::REDISCLOUD_URL,
        }
    }

    /// Keys this broker populates, each from the source variable.
    pub const fn keys(self) -> &'static [&'static str] {
        match self {
            Self::RabbitMq => &[keys::BROKER_URL],
            Self::RedisCloud => &[keys::BROKER_URL, keys::BROKER_TRANSPORT],
        }
    }

    /// First broker whose variable is present.
    pub fn detect(snapshot: &EnvironmentSnapshot) -> Option<Self> {
        Self::DETECTION_ORDER
            .into_iter()
            .find(|broker| snapshot.contains(broker.source_var()))
    }

    /// Human-readable name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::RabbitMq => "rabbitmq",
            Self::RedisCloud => "rediscloud",
        }
    }
}

impl fmt::Display for Broker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Outbound mail relay add-on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum MailProvider {
    /// Mailgun
    Mailgun,
    /// SendGrid
    SendGrid,
    /// Postmark
    Postmark,
}

/// SMTP settings derived from a mail provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmtpSettings {
    /// Relay host
    pub server: ConfigValue,
    /// SMTP login
    pub login: ConfigValue,
    /// SMTP password
    pub password: ConfigValue,
}

/// SendGrid's relay host; SendGrid does not export it.
pub const SENDGRID_SMTP_SERVER: &str = "smtp.sendgrid.net";

impl MailProvider {
    /// Detection order; the first present signature variable wins.
    pub const DETECTION_ORDER: [Self; 3] = [Self::Mailgun, Self::SendGrid, Self::Postmark];

    /// Variable whose presence selects this provider.
    pub const fn signature_var(self) -> &'static str {
        match self {
            Self::Mailgun => env::MAILGUN_SMTP_SERVER,
            Self::SendGrid => env::SENDGRID_USERNAME,
            Self::Postmark => env::POSTMARK_SMTP_SERVER,
        }
    }

    /// First provider whose signature variable is present.
    pub fn detect(snapshot: &EnvironmentSnapshot) -> Option<Self> {
        Self::DETECTION_ORDER
            .into_iter()
            .find(|provider| snapshot.contains(provider.signature_var()))
    }

    /// SMTP settings for this provider.
    ///
    /// Postmark's server is the literal text `"POSTMARK_SMTP_SERVER"` unless
    /// `postmark_server_from_env` is set, in which case the variable's value
    /// is used. Existing deployments rely on the literal.
    pub fn smtp_settings(
        self,
        snapshot: &EnvironmentSnapshot,
        postmark_server_from_env: bool,
    ) -> SmtpSettings {
        let var = |name: &str| ConfigValue::from(snapshot.get(name));

        match self {
            Self::Mailgun => SmtpSettings {
                server: var(env::MAILGUN_SMTP_SERVER),
                login: var(env::MAILGUN_SMTP_LOGIN),
                password: var(env::MAILGUN_SMTP_PASSWORD),
            },
            Self::SendGrid => SmtpSettings {
                server: ConfigValue::from(SENDGRID_SMTP_SERVER),
                login: var(env::SENDGRID_USERNAME),
                password: var(env::SENDGRID_PASSWORD),
            },
            Self::Postmark => SmtpSettings {
                server: if postmark_server_from_env {
                    var(env::POSTMARK_SMTP_SERVER)
                } else {
                    ConfigValue::from(env::POSTMARK_SMTP_SERVER)
                },
                login: var(env::POSTMARK_API_KEY),
                password: var(env::POSTMARK_API_KEY),
            },
        }
    }

    /// Human-readable name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mailgun => "mailgun",
            Self::SendGrid => "sendgrid",
            Self::Postmark => "postmark",
        }
    }
}

impl fmt::Display for MailProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Which document-store add-on, if any, should configure MongoDB.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "variables", rename_all = "snake_case")]
pub enum DocumentStoreSelection {
    /// No document-store variable is present
    Absent,
    /// Exactly one is present
    Single(&'static str),
    /// Several are present; none can be chosen
    Ambiguous(Vec<&'static str>),
}

impl DocumentStoreSelection {
    /// Intersect the present variable names with the known document-store
    /// variables. Presence counts, even for empty values.
    pub fn detect(snapshot: &EnvironmentSnapshot) -> Self {
        let mut present: Vec<&'static str> = DOCUMENT_STORE_SOURCES
            .into_iter()
            .filter(|name| snapshot.contains(name))
            .collect();

        match present.len() {
            0 => Self::Absent,
            1 => Self::Single(present.remove(0)),
            _ => Self::Ambiguous(present),
        }
    }
}

impl fmt::Display for DocumentStoreSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Absent => f.write_str("none"),
            Self::Single(var) => f.write_str(var),
            Self::Ambiguous(vars) => write!(f, "ambiguous ({})", vars.join(", ")),
        }
    }
}
