use crate::api::{EventSink, TrackEvent};
use crate::config::Config;
use crate::error::TrackError;
use crate::metrics::{EventNameParts, FileStat, TrackProperties, compression_ratio, prop};
use crate::utils::debug_log;

/// Parameters of one test-run report, as given on the command line.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TrackArgs {
    pub user_id: String,
    pub event_name: String,
    pub elapsed_time: String,
    pub cmd_result: Option<String>,
    pub exit_result: Option<String>,
    pub input_file: Option<String>,
    pub output_file: Option<String>,
    /// Unrecognized arguments, reported verbatim as "Full Command"
    pub full_command: Vec<String>,
}

fn supplied(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

/// Derive the property set for a test run.
///
/// Touches the filesystem only to stat supplied input/output files.
pub fn build_properties(args: &TrackArgs, config: &Config) -> Result<TrackProperties, TrackError> {
    let parts = EventNameParts::parse(&args.event_name);
    debug_log(&format!("Parsed event name '{}': {:?}", args.event_name, parts));

    let mut props = TrackProperties::new()
        .string(prop::ELAPSED_TIME, args.elapsed_time.as_str())
        .string(prop::COMMAND, parts.command.as_str())
        .string(prop::FILE, parts.file.as_str())
        .string_opt(prop::OPEN_MODE, parts.open_mode().map(String::from))
        .string(prop::TEST, parts.test.as_str())
        .string(prop::FULL_COMMAND, args.full_command.join(" "))
        .string_opt(
            prop::COMPRESSION_LEVEL,
            parts.compression_level().map(String::from),
        );

    for (key, value) in config.ci().properties() {
        props = props.string(key, value);
    }

    props = props
        .string_opt(prop::COMMAND_RESULT, supplied(&args.cmd_result))
        .string_opt(prop::EXIT_RESULT, supplied(&args.exit_result));

    let input = supplied(&args.input_file)
        .map(FileStat::from_path)
        .transpose()?;
    if let Some(stat) = &input {
        debug_log(&format!("Input file {} is {} bytes", stat.path, stat.size));
        props = props
            .string(prop::INPUT_FILE, stat.name.as_str())
            .number(prop::INPUT_FILE_SIZE, stat.size);
    }

    let output = supplied(&args.output_file)
        .map(FileStat::from_path)
        .transpose()?;
    if let Some(stat) = &output {
        debug_log(&format!("Output file {} is {} bytes", stat.path, stat.size));
        props = props
            .string(prop::OUTPUT_FILE, stat.name.as_str())
            .number(prop::OUTPUT_FILE_SIZE, stat.size);
    }

    if let (Some(input), Some(output)) = (&input, &output) {
        match compression_ratio(input, output) {
            Some(ratio) => props = props.string(prop::RATIO, ratio),
            None => debug_log("No compression ratio for this input/output pair"),
        }
    }

    Ok(props)
}

/// Build the event for a test run without sending it.
pub fn build_event(args: &TrackArgs, config: &Config) -> Result<TrackEvent, TrackError> {
    let props = build_properties(args, config)?;
    Ok(TrackEvent::new(
        config.token(),
        &args.user_id,
        &args.event_name,
        props,
    ))
}

/// Build the event for a test run and submit it to `sink`. Returns the
/// event that was accepted.
pub fn report(
    args: &TrackArgs,
    config: &Config,
    sink: &dyn EventSink,
) -> Result<TrackEvent, TrackError> {
    let event = build_event(args, config)?;
    sink.track(&event)?;
    debug_log(&format!("Tracked '{}' for {}", event.event, args.user_id));
    Ok(event)
}
