use pretty_assertions::assert_eq;
use rossoc_codegen::{CompileError, Renderer, TargetRegistry, compile};
use rossoc_parser::Ir;
use rossoc_parser::semantic::BUILTIN_TARGETS;

fn render(source: &str) -> String {
    compile(source, &TargetRegistry::with_builtins())
        .unwrap_or_else(|e| panic!("compile failed: {e}"))
        .content
}

#[test]
fn test_builtin_registry_matches_analyzer_defaults() {
    let registry = TargetRegistry::with_builtins();
    assert_eq!(registry.target_names(), BUILTIN_TARGETS.to_vec());
}

#[test]
fn test_file_extensions() {
    let registry = TargetRegistry::with_builtins();
    let extensions: Vec<_> = registry
        .target_names()
        .into_iter()
        .map(|name| registry.get(name).unwrap().file_extension())
        .collect();
    assert_eq!(extensions, vec!["ino", "ino", "txt", "rb"]);
}

#[test]
fn test_arduino_sketch() {
    let expected = "\
// Generated by rossoc (target: arduino)

void setup() {
  Serial.begin(115200);
  pinMode(1, INPUT);
  pinMode(3, INPUT);
}

void loop() {
  int din1 = digitalRead(1);
  int din3 = digitalRead(3);
  int ain2 = analogRead(2);
  if (din3 == 1) {
    Serial.print(din1);
    Serial.print(\",\");
    Serial.println(ain2);
  }
  delay(500);
}
";
    assert_eq!(
        render("SELECT din1, ain2 FROM arduino WHERE din3 = 1 RSLEEP 0.5 RSPEED 115200"),
        expected
    );
}

#[test]
fn test_board_is_an_arduino_alias() {
    let arduino = render("SELECT din4 FROM arduino WHERE din4 <> 0");
    let board = render("SELECT din4 FROM board WHERE din4 <> 0");
    assert_eq!(
        board,
        arduino.replace("(target: arduino)", "(target: board)")
    );
}

#[test]
fn test_arduino_without_condition_or_sleep() {
    let content = render("SELECT ain0 FROM arduino");
    assert!(content.contains("  Serial.begin(9600);\n"));
    assert!(content.contains("  if (1) {\n"));
    assert!(!content.contains("pinMode"));
    assert!(!content.contains("delay"));
}

#[test]
fn test_mruby_script() {
    let expected = "\
# Generated by rossoc (target: mruby)

Serial.begin(115200)
pinMode(1, INPUT)
pinMode(3, INPUT)

loop do
  din1 = digitalRead(1)
  din3 = digitalRead(3)
  ain2 = analogRead(2)
  if din3 == 1
    Serial.println([din1, ain2].join(','))
  end
  delay(500)
end
";
    assert_eq!(
        render("SELECT din1, ain2 FROM mruby WHERE din3 = 1 RSLEEP 0.5 RSPEED 115200"),
        expected
    );
}

#[test]
fn test_dev_listing() {
    let expected = "\
target: dev
speed: 9600
sleep: none
digital in: -
analog in: 5
digital out: -
analog out: 5
condition: 1
";
    assert_eq!(render("SELECT ain5 FROM dev"), expected);
}

#[test]
fn test_dev_listing_with_sleep() {
    let content = render("SELECT din2 FROM dev WHERE NOT (din2 = 1 OR ain4 > 10) RSLEEP 100");
    assert!(content.contains("sleep: 100s (100000ms)\n"));
    assert!(content.contains("digital in: 2\n"));
    assert!(content.contains("analog in: 4\n"));
    assert!(content.contains("condition: !(din2 == 1 || ain4 > 10)\n"));
}

#[test]
fn test_out_of_range_timing_is_clamped_for_boards() {
    let source = "SELECT din1 FROM arduino RSLEEP 1e300 RSPEED 9600.5";

    let sketch = render(source);
    assert!(sketch.contains("  Serial.begin(9600);\n"));
    assert!(sketch.contains("  delay(4294967295);\n"));

    let script = render(&source.replace("arduino", "mruby"));
    assert!(script.contains("Serial.begin(9600)\n"));
    assert!(script.contains("  delay(4294967295)\n"));

    let listing = render(&source.replace("arduino", "dev"));
    assert!(listing.contains("speed: 9600.5\n"));
}

#[test]
fn test_output_order_is_independent_of_select_order() {
    let a = render("SELECT ain3, din10, din2, ain1 FROM arduino");
    let b = render("SELECT din2, ain1, din10, ain3 FROM arduino");
    assert_eq!(a, b);
    assert!(a.contains(
        "    Serial.print(din2);\n    Serial.print(\",\");\n    Serial.print(din10);\n"
    ));
}

#[test]
fn test_rendering_is_deterministic() {
    let source = "SELECT din5, ain1, din0 FROM mruby WHERE ain7 >= 300 AND din9 = 0 RSLEEP 2";
    let first = render(source);
    for _ in 0..10 {
        assert_eq!(render(source), first);
    }
}

struct Csv;

impl Renderer for Csv {
    fn name(&self) -> &str {
        "csv"
    }

    fn file_extension(&self) -> &str {
        "csv"
    }

    fn render(&self, ir: &Ir) -> String {
        format!("{},{}\n", ir.target, ir.condition)
    }
}

#[test]
fn test_registered_renderer_becomes_a_valid_target() {
    let mut registry = TargetRegistry::with_builtins();
    assert!(matches!(
        compile("SELECT din1 FROM csv", &registry),
        Err(CompileError::Semantic(_))
    ));

    registry.register(Csv);
    assert!(registry.contains("csv"));
    let compiled = compile("SELECT din1 FROM csv WHERE din1 = 1", &registry).unwrap();
    assert_eq!(compiled.content, "csv,din1 == 1\n");
}

#[test]
fn test_compile_errors_keep_their_stage() {
    let registry = TargetRegistry::with_builtins();

    let syntax = compile("SELECT din1 FROM", &registry).unwrap_err();
    assert!(matches!(syntax, CompileError::Syntax(_)));
    assert_eq!(syntax.code().to_string(), "E2003");

    let semantic = compile("SELECT foo FROM dev", &registry).unwrap_err();
    assert!(matches!(semantic, CompileError::Semantic(_)));
    assert_eq!(semantic.to_string(), "Unknown column 'foo'");
}
