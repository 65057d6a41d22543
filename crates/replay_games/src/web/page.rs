//! HTML rendering of a [`GameView`].

use crate::view::{CellView, GameView, MoveEntry};

const STYLE: &str = r#"
body { font: 14px "Century Gothic", Futura, sans-serif; margin: 20px; }
.game { display: flex; flex-direction: row; }
.game-info { margin-left: 20px; }
.status { margin-bottom: 10px; }
.board-row { display: flex; }
.board-row form { margin: 0; }
.square { background: #fff; border: 1px solid #999; font-size: 24px; font-weight: bold;
  line-height: 34px; height: 34px; width: 34px; margin: -1px -1px 0 0; padding: 0;
  text-align: center; }
.square.highlight { background: #ffd54f; }
ol form { display: inline; margin: 0; }
"#;

/// Renders the whole page.
pub fn render(view: &GameView) -> String {
    let mut html = String::from("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str("<title>Tic-Tac-Toe</title>\n<style>");
    html.push_str(STYLE);
    html.push_str("</style>\n</head>\n<body>\n<div class=\"game\">\n");

    html.push_str("<div class=\"game-board\">\n");
    html.push_str(&format!("<div class=\"status\">{}</div>\n", view.status()));
    for row in view.cells().chunks(3) {
        html.push_str("<div class=\"board-row\">");
        for cell in row {
            html.push_str(&render_cell(cell));
        }
        html.push_str("</div>\n");
    }
    html.push_str("</div>\n");

    html.push_str("<div class=\"game-info\">\n");
    html.push_str(&format!(
        "<form method=\"post\" action=\"/order\"><button>{}</button></form>\n",
        view.toggle_label()
    ));
    html.push_str("<ol>\n");
    for entry in view.moves() {
        html.push_str(&render_move(entry));
    }
    html.push_str("</ol>\n</div>\n");

    html.push_str("</div>\n</body>\n</html>\n");
    html
}

fn render_cell(cell: &CellView) -> String {
    let class = if *cell.highlighted() {
        "square highlight"
    } else {
        "square"
    };
    format!(
        "<form method=\"post\" action=\"/cells/{}\"><button class=\"{}\">{}</button></form>",
        cell.position().to_index(),
        class,
        cell.symbol()
    )
}

fn render_move(entry: &MoveEntry) -> String {
    if entry.is_jump_target() {
        format!(
            "<li><form method=\"post\" action=\"/moves/{}\"><button>{}</button></form></li>\n",
            entry.move_number(),
            entry.description()
        )
    } else {
        format!("<li>{}</li>\n", entry.description())
    }
}
