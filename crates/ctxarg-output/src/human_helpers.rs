use ctxarg_enforce::types::Violation;

pub(crate) fn format_violation_human(v: &Violation) -> String {
    let mut out = format!(
        "{}:{}:{}: {} [{}]\n",
        v.file, v.line, v.column, v.message, v.code,
    );

    if let Some(sig) = &v.signature {
        out.push_str(&format!("  --> in {}\n", sig));
    }

    if v.suppressed {
        if let Some(hint) = &v.suppress_hint {
            out.push_str(&format!("   = {}\n", hint));
        }
    }

    out
}

pub(crate) fn plural(count: usize, noun: &str) -> String {
    format!("{} {}(s)", count, noun)
}
