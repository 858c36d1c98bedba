// One-question quiz played through a pseudo terminal against the built
// binary: answer a squares question, land on the results screen, leave.
// Ignored by default since it needs a pty; run it with
// `cargo test --test integration_min_session -- --ignored`.

#![cfg(unix)]

use std::time::Duration;

use expectrl::{spawn, Eof};

const SETTLE: Duration = Duration::from_millis(200);

#[test]
#[ignore]
fn single_squares_question_reaches_results_and_quits() -> Result<(), Box<dyn std::error::Error>>
{
    let bin = assert_cmd::cargo::cargo_bin("mathdash");
    let mut quiz = spawn(format!(
        "{} -n pty -c squares -q 1 -s 30",
        bin.display()
    ))?;
    std::thread::sleep(SETTLE);

    // any answer ends a one-question session
    quiz.send("1\r")?;
    std::thread::sleep(SETTLE);

    quiz.send("\x1b")?;
    quiz.expect(Eof)?;
    Ok(())
}
