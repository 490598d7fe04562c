//! Scaffolding run messages (alphabetically sorted)

pub struct ScaffoldMessages {
    pub activate_hint: &'static str,
    pub complete: &'static str,
    pub creating_env: &'static str,
    pub ensuring_dir: &'static str,
    pub header: &'static str,
    pub interpreter_not_found: &'static str,
    pub note_written: &'static str,
    pub step_failed: &'static str,
    pub strict_hint: &'static str,
    pub summary_env: &'static str,
    pub summary_interpreter: &'static str,
    pub summary_note: &'static str,
    pub unknown_platform: &'static str,
    pub upgrading_pip: &'static str,
    pub writing_note: &'static str,
}

pub const SCAFFOLD_MESSAGES: ScaffoldMessages = ScaffoldMessages {
    activate_hint: "💡 Activate with: {command}",
    complete: "✅ Project ready at {path}",
    creating_env: "Creating virtual environment in {path}...",
    ensuring_dir: "Creating project folder {path}...",
    header: "🐍 Setting up '{path}' with {interpreter}",
    interpreter_not_found: "Interpreter '{interpreter}' was not found; environment creation will likely fail",
    note_written: "Wrote {path}",
    step_failed: "{step} failed: {outcome}",
    strict_hint: "The note file was written anyway; pass --strict to stop at the first failed step",
    summary_env: "  Environment:  {path}",
    summary_interpreter: "  Interpreter:  {path}",
    summary_note: "  Note:         {path}",
    unknown_platform: "unknown platform '{name}' (expected one of: {supported})",
    upgrading_pip: "Upgrading pip with {interpreter}...",
    writing_note: "Writing {path}...",
};
