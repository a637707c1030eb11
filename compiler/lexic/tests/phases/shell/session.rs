//! A shell session from first line to `exit`.

use lexi_eval::{buffer_handler, scripted_handler};
use lexic::repl::{Shell, ShellAction, GOODBYE};
use pretty_assertions::assert_eq;

#[test]
fn edit_run_fix_run() {
    let output = buffer_handler();
    let mut shell = Shell::new(output.clone(), scripted_handler(["5"]));

    for line in [
        "ask for n",
        "set total to 0",
        "for i from 1 to n",
        "  increase total by i",
        "end",
        "display total * scale",
        "run",
    ] {
        assert_eq!(shell.handle_line(line), ShellAction::Continue);
    }
    assert_eq!(
        output.get_output(),
        "? 5\nError: Line 6: Variable 'scale' not defined\n\n"
    );

    output.clear();
    for line in ["clear", "set total to 15", "display \"Total: \" + total", "run", "show"] {
        assert_eq!(shell.handle_line(line), ShellAction::Continue);
    }
    assert_eq!(shell.handle_line("exit"), ShellAction::Exit);
    assert_eq!(
        output.get_output(),
        format!(
            "Memory cleared.\nTotal: 15\n\n\
             VARIABLES:\n  total = 15\nFUNCTIONS:\n  (none)\nPROGRAM LINES: 2\n\
             {GOODBYE}\n"
        )
    );
}
