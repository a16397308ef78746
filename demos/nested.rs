use loop_once::ONCE;

fn main() {
   for _ in ONCE {
      println!("outer: start");

      let bail = std::env::args().len() < 100;
      for _ in ONCE {
         println!("inner: start");
         if bail {
            // Ends only the inner iteration.
            break;
         }
         println!("inner: never printed");
      }

      // The outer body resumes here after the inner break.
      println!("outer: end");
   }
   println!("after outer loop");
}
