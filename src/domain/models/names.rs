//! Recognized environment variable names and the configuration keys they feed.

/// Environment variables read by the resolver.
pub mod env {
    /// Application secret key.
    pub const SECRET_KEY: &str = "SECRET_KEY";
    /// Primary SQL database connection string.
    pub const DATABASE_URL: &str = "DATABASE_URL";
    /// Sentry error-tracking DSN.
    pub const SENTRY_DSN: &str = "SENTRY_DSN";
    /// Exceptional exception-tracking API key.
    pub const EXCEPTIONAL_API_KEY: &str = "EXCEPTIONAL_API_KEY";
    /// Google identity-federation domain.
    pub const GOOGLE_DOMAIN: &str = "GOOGLE_DOMAIN";

    /// RabbitMQ broker URL.
    pub const RABBITMQ_URL: &str = "RABBITMQ_URL";
    /// RedisCloud broker URL.
    pub const REDISCLOUD_URL: &str = "REDISCLOUD_URL";

    /// Mailgun SMTP relay host.
    pub const MAILGUN_SMTP_SERVER: &str = "MAILGUN_SMTP_SERVER";
    /// Mailgun SMTP login.
    pub const MAILGUN_SMTP_LOGIN: &str = "MAILGUN_SMTP_LOGIN";
    /// Mailgun SMTP password.
    pub const MAILGUN_SMTP_PASSWORD: &str = "MAILGUN_SMTP_PASSWORD";
    /// SendGrid account username.
    pub const SENDGRID_USERNAME: &str = "SENDGRID_USERNAME";
    /// SendGrid account password.
    pub const SENDGRID_PASSWORD: &str = "SENDGRID_PASSWORD";
    /// Postmark SMTP relay host.
    pub const POSTMARK_SMTP_SERVER: &str = "POSTMARK_SMTP_SERVER";
    /// Postmark API key, used as both SMTP login and password.
    pub const POSTMARK_API_KEY: &str = "POSTMARK_API_KEY";

    /// Heroku Redis URL.
    pub const REDIS_URL: &str = "REDIS_URL";
    /// Redis To Go URL.
    pub const REDISTOGO_URL: &str = "REDISTOGO_URL";

    /// MongoLab connection string.
    pub const MONGOLAB_URI: &str = "MONGOLAB_URI";
    /// MongoHQ connection string.
    pub const MONGOHQ_URL: &str = "MONGOHQ_URL";
    /// mLab / generic MongoDB connection string.
    pub const MONGODB_URI: &str = "MONGODB_URI";

    /// Cloudant (CouchDB) URL.
    pub const CLOUDANT_URL: &str = "CLOUDANT_URL";

    /// MemCachier server list.
    pub const MEMCACHIER_SERVERS: &str = "MEMCACHIER_SERVERS";
    /// MemCachier username.
    pub const MEMCACHIER_USERNAME: &str = "MEMCACHIER_USERNAME";
    /// MemCachier password.
    pub const MEMCACHIER_PASSWORD: &str = "MEMCACHIER_PASSWORD";
}

/// Configuration keys written by the resolver.
pub mod keys {
    #![allow(missing_docs)]

    pub const SECRET_KEY: &str = "SECRET_KEY";
    pub const SQLALCHEMY_DATABASE_URI: &str = "SQLALCHEMY_DATABASE_URI";
    pub const SENTRY_DSN: &str = "SENTRY_DSN";
    pub const EXCEPTIONAL_API_KEY: &str = "EXCEPTIONAL_API_KEY";
    pub const GOOGLE_DOMAIN: &str = "GOOGLE_DOMAIN";

    pub const BROKER_URL: &str = "BROKER_URL";
    pub const BROKER_TRANSPORT: &str = "BROKER_TRANSPORT";

    pub const SMTP_SERVER: &str = "SMTP_SERVER";
    pub const SMTP_LOGIN: &str = "SMTP_LOGIN";
    pub const SMTP_PASSWORD: &str = "SMTP_PASSWORD";
    pub const MAIL_SERVER: &str = "MAIL_SERVER";
    pub const MAIL_USERNAME: &str = "MAIL_USERNAME";
    pub const MAIL_PASSWORD: &str = "MAIL_PASSWORD";
    pub const MAIL_USE_TLS: &str = "MAIL_USE_TLS";

    pub const REDIS_HOST: &str = "REDIS_HOST";
    pub const REDIS_PORT: &str = "REDIS_PORT";
    pub const REDIS_PASSWORD: &str = "REDIS_PASSWORD";

    pub const MONGO_URI: &str = "MONGO_URI";
    pub const MONGODB_USER: &str = "MONGODB_USER";
    pub const MONGODB_USERNAME: &str = "MONGODB_USERNAME";
    pub const MONGODB_PASSWORD: &str = "MONGODB_PASSWORD";
    pub const MONGODB_HOST: &str = "MONGODB_HOST";
    pub const MONGODB_PORT: &str = "MONGODB_PORT";
    pub const MONGODB_DB: &str = "MONGODB_DB";

    pub const COUCHDB_SERVER: &str = "COUCHDB_SERVER";

    pub const CACHE_MEMCACHED_SERVERS: &str = "CACHE_MEMCACHED_SERVERS";
    pub const CACHE_MEMCACHED_USERNAME: &str = "CACHE_MEMCACHED_USERNAME";
    pub const CACHE_MEMCACHED_PASSWORD: &str = "CACHE_MEMCACHED_PASSWORD";
}
