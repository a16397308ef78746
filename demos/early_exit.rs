use loop_once::ONCE;

/// Validates a request line, capturing the outcome into named variables and
/// reporting it from a single exit point after the loop.
fn validate(line: &str) -> Result<(&str, &str), String> {
   let mut method = "";
   let mut path = "";
   let mut error = None;

   for _ in ONCE {
      let mut parts = line.split_whitespace();

      match parts.next() {
         Some(m) if m.chars().all(|c| c.is_ascii_uppercase()) => method = m,
         Some(m) => {
            error = Some(format!("bad method: {m:?}"));
            break;
         }
         None => {
            error = Some("empty request line".to_string());
            break;
         }
      }

      match parts.next() {
         Some(p) if p.starts_with('/') => path = p,
         _ => {
            error = Some("missing path".to_string());
            break;
         }
      }
   }

   // Single exit point.
   match error {
      Some(e) => Err(e),
      None => Ok((method, path)),
   }
}

fn main() {
   for line in ["GET /index.html", "get /index.html", "POST", ""] {
      match validate(line) {
         Ok((method, path)) => println!("{line:?} -> {method} {path}"),
         Err(e) => println!("{line:?} -> rejected: {e}"),
      }
   }
}
