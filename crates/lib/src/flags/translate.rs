//! GYP → GN flag rewriting.
//!
//! GYP spells booleans as `1`/`0` and calls 32-bit x86 `ia32`; GN wants
//! `true`/`false` and `"x86"`. The boolean rewrite is a plain substring
//! replace of `=1` and `=0` anywhere in the token, so `foo=10` becomes
//! `foo=true0`. Embedders rely on the existing output, so keep it literal.

const TARGET_CPU_IA32: &str = "target_cpu=ia32";
const TARGET_CPU_X86: &str = "target_cpu=\"x86\"";

/// Translates a single flag token. Tokens with nothing to rewrite come back unchanged.
pub fn translate_flag(flag: &str) -> String {
  let flag = flag.replace("=1", "=true").replace("=0", "=false");
  if flag == TARGET_CPU_IA32 {
    TARGET_CPU_X86.to_string()
  } else {
    flag
  }
}

/// Translates every token, one output per input, in order.
pub fn translate_flags<S: AsRef<str>>(flags: &[S]) -> Vec<String> {
  flags.iter().map(|flag| translate_flag(flag.as_ref())).collect()
}
