use std::ffi::OsString;

/// Flags that take a value and are understood by the binary.
pub const VALUE_FLAGS: &[&str] = &[
    "--user_id",
    "--event_name",
    "--elapsed_time",
    "--cmd_result",
    "--exit_result",
    "--input_file",
    "--output_file",
];

/// Flags without a value that are understood by the binary.
pub const SWITCH_FLAGS: &[&str] = &["-h", "--help"];

/// Result of splitting argv (without the program name) into the flags we
/// understand and everything else.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SplitArgs {
    /// Recognized flags, normalized to `--flag=value` so values starting with
    /// `-` survive a second parse.
    pub recognized: Vec<String>,
    /// Everything else, in original order.
    pub unrecognized: Vec<String>,
}

/// Split arguments the way a "parse known args" option parser does.
///
/// Rules:
/// - `--flag VALUE` and `--flag=VALUE` are recognized for every entry in [`VALUE_FLAGS`].
///   The token after a bare value flag is always taken as its value.
/// - [`SWITCH_FLAGS`] are recognized as-is.
/// - The first bare `--` ends flag recognition; it and all following tokens
///   are unrecognized.
/// - A value flag at the very end with no value is passed through as
///   recognized so the argument parser can report it.
pub fn split_known_args<I, S>(args: I) -> SplitArgs
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut split = SplitArgs::default();
    let mut iter = args.into_iter().map(Into::<String>::into);

    while let Some(arg) = iter.next() {
        if arg == "--" {
            split.unrecognized.push(arg);
            split.unrecognized.extend(iter.by_ref());
            break;
        }

        if SWITCH_FLAGS.contains(&arg.as_str()) {
            split.recognized.push(arg);
            continue;
        }

        let has_inline_value = arg
            .split_once('=')
            .is_some_and(|(flag, _)| VALUE_FLAGS.contains(&flag));
        if has_inline_value {
            split.recognized.push(arg);
            continue;
        }

        if VALUE_FLAGS.contains(&arg.as_str()) {
            match iter.next() {
                Some(value) => split.recognized.push(format!("{}={}", arg, value)),
                None => split.recognized.push(arg),
            }
            continue;
        }

        split.unrecognized.push(arg);
    }

    split
}

/// Convert raw process arguments to strings, replacing invalid UTF-8 with
/// U+FFFD instead of failing.
pub fn lossy_args<I>(args: I) -> Vec<String>
where
    I: IntoIterator<Item = OsString>,
{
    args.into_iter()
        .map(|arg| match arg.into_string() {
            Ok(s) => s,
            Err(raw) => raw.to_string_lossy().into_owned(),
        })
        .collect()
}
