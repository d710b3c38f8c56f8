//! docfilter confirm コマンド
//!
//! 削除確認ダイアログを表示する。確定すると `deleteClicked` を出力して
//! 正常終了し、キャンセルするとエラー終了する。

use crate::tui::delete_dialog::{self, DeleteDialog};
use crate::tui::ModalHandle;
use clap::Parser;

#[derive(Debug, Parser)]
pub struct Args {
    /// Dialog title
    #[arg(long)]
    pub title: Option<String>,

    /// Main message
    #[arg(long)]
    pub message: Option<String>,

    /// Secondary message shown in bold
    #[arg(long)]
    pub message2: Option<String>,
}

pub async fn run(args: Args) -> Result<(), String> {
    let mut dialog = build_dialog(args);
    let mut confirmed = false;

    delete_dialog::run(&mut dialog, |modal| {
        // 削除の実行はホストの責務。ここでは確定を記録して閉じる
        confirmed = true;
        modal.close();
    })
    .map_err(|e| e.to_string())?;

    if confirmed {
        println!("deleteClicked");
        Ok(())
    } else {
        Err("Cancelled".to_string())
    }
}

fn build_dialog(args: Args) -> DeleteDialog {
    let mut dialog = DeleteDialog::new();
    if let Some(title) = args.title {
        dialog = dialog.with_title(title);
    }
    if let Some(message) = args.message {
        dialog = dialog.with_message(message);
    }
    if let Some(message2) = args.message2 {
        dialog = dialog.with_message2(message2);
    }
    dialog
}
