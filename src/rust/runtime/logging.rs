// Copyright (c) Microsoft Corporation.
// Licensed under the MIT license.

//======================================================================================================================
// Imports
//======================================================================================================================

use ::flexi_logger::{
    Logger,
    LoggerHandle,
};
use ::std::sync::{
    Once,
    OnceLock,
};

//======================================================================================================================
// Static Variables
//======================================================================================================================

/// Guardian to the logging initialize function.
static INIT_LOG: Once = Once::new();

/// Handle of the installed logger. It must outlive every log call.
static LOGGER: OnceLock<LoggerHandle> = OnceLock::new();

/// Log specification used when `RUST_LOG` is not set.
const DEFAULT_LOG_SPEC: &str = "info";

//======================================================================================================================
// Standalone Functions
//======================================================================================================================

/// Initializes logging features.
pub fn initialize() {
    INIT_LOG.call_once(|| {
        // Configured from the RUST_LOG env var.
        let logger: Logger = match Logger::try_with_env_or_str(DEFAULT_LOG_SPEC) {
            Ok(logger) => logger,
            Err(e) => {
                eprintln!("initialize(): invalid log specification (error={:?})", e);
                return;
            },
        };
        match logger.start() {
            Ok(handle) => {
                let _ = LOGGER.set(handle);
            },
            // Another logger was installed first.
            Err(e) => eprintln!("initialize(): failed to start logger (error={:?})", e),
        }
    });
}
