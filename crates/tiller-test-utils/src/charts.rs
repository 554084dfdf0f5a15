//! The "moby" chart tree used by coalescing tests.

use crate::documents::values;
use tiller_values::Chart;

/// Overrides exercising null tombstones and per-chart globals.
pub const MOBY_OVERRIDES: &str = r#"
top: yup
bottom: null
right: Null
left: NULL
front: ~
back: ""

global:
  name: Ishmael
  subject: Queequeg
  nested:
    boat: true

pequod:
  global:
    name: Stinky
    harpooner: Tashtego
    nested:
      boat: false
      sail: true
  ahab:
    scope: whale
"#;

/// moby -> (pequod -> ahab, spouter), each chart naming itself in `name`.
pub fn moby_chart() -> Chart {
    let ahab = Chart::new("ahab").with_values(values("name: ahab\nscope: ahab\n"));
    let pequod = Chart::new("pequod")
        .with_values(values("name: pequod\nscope: pequod\n"))
        .with_dependency(ahab);
    let spouter = Chart::new("spouter").with_values(values("name: spouter\nscope: spouter\n"));
    Chart::new("moby")
        .with_values(values(
            "name: moby\nscope: moby\ntop: nope\nbottom: doesnt matter\nright: default\nleft: default\nfront: default\n",
        ))
        .with_dependency(pequod)
        .with_dependency(spouter)
}
