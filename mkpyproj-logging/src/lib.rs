use std::{
    collections::HashMap,
    env,
    io::{self, Write},
    path::{Path, PathBuf},
};
use tracing::{field::Visit, span, subscriber::Interest, Metadata, Subscriber};
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::{
    fmt::MakeWriter,
    layer::{Context, Layer, Layered},
    prelude::*,
    registry::LookupSpan,
    EnvFilter, Registry,
};

/// Writes every buffer to the console and to the log file.
struct TeeWriter<C, F> {
    console: C,
    file: F,
}

impl<C: Write, F: Write> Write for TeeWriter<C, F> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let console = self.console.write_all(buf);
        let file = self.file.write_all(buf);
        console.or(file).map(|()| buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.console.flush()?;
        self.file.flush()
    }
}

#[derive(Clone)]
struct MakeTee<C, F> {
    console: C,
    file: F,
}

impl<'a, C, F> MakeWriter<'a> for MakeTee<C, F>
where
    C: MakeWriter<'a>,
    F: MakeWriter<'a>,
{
    type Writer = TeeWriter<C::Writer, F::Writer>;

    fn make_writer(&'a self) -> Self::Writer {
        TeeWriter {
            console: self.console.make_writer(),
            file: self.file.make_writer(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
struct Tag {
    key: String,
    value: String,
}

/// Parses `LOG_TAGS` (`key:value,key:value`). Malformed entries are skipped.
fn parse_tags(raw: &str) -> Vec<Tag> {
    raw.split(',')
        .filter_map(|entry| {
            let (key, value) = entry.split_once(':')?;
            let key = key.trim();
            if key.is_empty() {
                return None;
            }
            Some(Tag {
                key: key.to_string(),
                value: value.trim().to_string(),
            })
        })
        .collect()
}

/// `*` matches any value; otherwise the span field must contain the tag value.
fn tags_match(filters: &[Tag], fields: &HashMap<String, String>) -> bool {
    filters.iter().all(|filter| {
        fields
            .get(&filter.key)
            .is_some_and(|value| filter.value == "*" || value.contains(&filter.value))
    })
}

type SpanFields = HashMap<String, String>;

/// Lets events through only when the spans around them carry the `LOG_TAGS` fields.
///
/// Spans always pass, so their fields are on record by the time an event
/// inside them asks.
struct TagFilterLayer {
    filters: Vec<Tag>,
}

impl TagFilterLayer {
    fn new(raw: &str) -> Self {
        Self {
            filters: parse_tags(raw),
        }
    }
}

impl<S> Layer<S> for TagFilterLayer
where
    S: Subscriber + for<'lookup> LookupSpan<'lookup>,
{
    fn register_callsite(&self, meta: &'static Metadata<'static>) -> Interest {
        if self.filters.is_empty() || meta.is_span() {
            Interest::always()
        } else {
            // The answer depends on the current span, so ask per event.
            Interest::sometimes()
        }
    }

    fn enabled(&self, meta: &Metadata<'_>, ctx: Context<'_, S>) -> bool {
        if self.filters.is_empty() || meta.is_span() {
            return true;
        }

        let Some(scope) = ctx.lookup_current().map(|span| span.scope()) else {
            return false;
        };

        let mut in_scope = SpanFields::new();
        for span in scope {
            if let Some(fields) = span.extensions().get::<SpanFields>() {
                for (key, value) in fields {
                    in_scope.entry(key.clone()).or_insert_with(|| value.clone());
                }
            }
        }

        tags_match(&self.filters, &in_scope)
    }

    fn on_new_span(&self, attrs: &span::Attributes<'_>, id: &span::Id, ctx: Context<'_, S>) {
        if self.filters.is_empty() {
            return;
        }
        if let Some(span) = ctx.span(id) {
            let mut fields = SpanFields::new();
            attrs.record(&mut FieldRecorder(&mut fields));
            span.extensions_mut().insert(fields);
        }
    }
}

struct FieldRecorder<'a>(&'a mut SpanFields);

impl Visit for FieldRecorder<'_> {
    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        self.0.insert(field.name().to_string(), value.to_string());
    }

    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        self.0.insert(field.name().to_string(), format!("{value:?}"));
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum LogOutput {
    Console,
    File,
    Both,
    Off,
}

impl LogOutput {
    fn parse(raw: &str) -> Self {
        match raw {
            "file" => LogOutput::File,
            "both" => LogOutput::Both,
            "none" | "off" => LogOutput::Off,
            _ => LogOutput::Console,
        }
    }
}

/// Subscriber stack below the output layer.
type FilteredRegistry = Layered<TagFilterLayer, Layered<EnvFilter, Registry>>;

type OutputLayer = Box<dyn Layer<FilteredRegistry> + Send + Sync + 'static>;

fn output_layer<W>(writer: W, json: bool, ansi: bool) -> OutputLayer
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let layer = tracing_subscriber::fmt::layer::<FilteredRegistry>()
        .with_ansi(ansi)
        .with_writer(writer);
    if json {
        Box::new(layer.json())
    } else {
        Box::new(layer.compact())
    }
}

fn default_log_file() -> PathBuf {
    env::temp_dir().join("mkpyproj.log")
}

fn file_writer(path: &Path) -> (NonBlocking, WorkerGuard) {
    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    let file_name = path.file_name().unwrap_or("mkpyproj.log".as_ref());
    tracing_appender::non_blocking(tracing_appender::rolling::daily(dir, file_name))
}

/// Initializes the global tracing subscriber based on environment variables.
///
/// `default_level` is used when neither `RUST_LOG` nor `LOG_LEVEL` is set.
/// Console logs go to stderr; stdout is reserved for the CLI's own output.
/// Keep the returned guard alive until exit or buffered file logs are lost.
pub fn init_subscriber(default_level: &str) -> Option<WorkerGuard> {
    let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| default_level.to_string());
    let log_output = LogOutput::parse(&env::var("LOG_OUTPUT").unwrap_or_default());
    let is_json = env::var("LOG_FORMAT").is_ok_and(|f| f == "json");
    let log_tags = env::var("LOG_TAGS").unwrap_or_default();
    let log_file_path = env::var("LOG_FILE_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| default_log_file());

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_level));

    let (output, guard) = match log_output {
        LogOutput::Console => (Some(output_layer(io::stderr, is_json, true)), None),
        LogOutput::File => {
            let (file, guard) = file_writer(&log_file_path);
            (Some(output_layer(file, is_json, false)), Some(guard))
        }
        LogOutput::Both => {
            let (file, guard) = file_writer(&log_file_path);
            let tee = MakeTee {
                console: io::stderr,
                file,
            };
            (Some(output_layer(tee, is_json, false)), Some(guard))
        }
        LogOutput::Off => (None, None),
    };

    let result = tracing_subscriber::registry()
        .with(env_filter)
        .with(TagFilterLayer::new(&log_tags))
        .with(output)
        .try_init();

    if let Err(e) = result {
        eprintln!("Failed to initialize logging: {e}");
    }

    guard
}
