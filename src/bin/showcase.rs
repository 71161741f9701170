//! Prints one record at every severity, then demonstrates muting and the
//! invalid-level diagnostic. Run with `cargo run --bin showcase`.

use huelog::{LogRecord, Logger};

fn main() {
    let mut logger = Logger::new("trace");

    logger.trace(&LogRecord::new("handshake bytes", "transport::tls"));
    logger.debug(&LogRecord::new("cache warmed", "store::init").with_notes(["1024 entries"]));
    logger.info(&LogRecord::new("listener started", "server::accept"));
    logger.warn(
        &LogRecord::new("retry budget low", "fetch::backoff")
            .with_status(429)
            .with_notes(["3 attempts remaining"]),
    );
    logger.error(&LogRecord::new("upstream refused", "gateway::proxy").with_status(502));
    logger.fatal(
        &LogRecord::new("config unreadable", "boot")
            .with_notes(["falling back to defaults", "check permissions"]),
    );

    // "off" mutes everything; this call prints nothing.
    logger.level = "off".to_string();
    logger.error(&LogRecord::new("you should not see this", "showcase"));

    // An unrecognized level turns every call into the magenta diagnostic.
    logger.level = "loud".to_string();
    logger.info(&LogRecord::new("ignored", "showcase"));
}
