//! Fixed names shared across the crate.

pub const APP_NAME: &str = "gnbuild";

/// Ninja target that produces `libv8_monolith.a`.
pub const BUILD_TARGET: &str = "v8_monolith";

/// Environment toggle for Goma distributed compilation. Only the exact value `"1"` enables it.
pub const GOMA_ENV: &str = "V8_USE_GOMA";

/// Ninja job count used when compilation is offloaded to Goma.
pub const GOMA_JOBS_FLAG: &str = "-j500";

/// Directory under the V8 checkout that holds the per-host GN binaries.
pub const BUILDTOOLS_DIR: &str = "buildtools";

/// Directory under the V8 checkout where depot_tools (and Ninja) are fetched.
pub const DEPOT_TOOLS_DIR: &str = "_depot_tools";

/// Exit code for failures detected before any subprocess ran (`EX_CONFIG` from sysexits.h).
pub const CONFIG_EXIT_CODE: i32 = 78;
