use moon::*;

async fn frontend() -> Frontend {
    Frontend::new()
        .title("Learn JavaScript DOM")
        .append_to_head(
            r#"<style>
                html, body { margin: 0; background: #141414; }
                .output.success { border-left: 3px solid #00bfa6; }
                .output.error { border-left: 3px solid #ff6b6b; color: #ffb4b4; }
            </style>"#,
        )
}

async fn up_msg_handler(_: UpMsgRequest<()>) {}

#[moon::main]
async fn main() -> std::io::Result<()> {
    start(frontend, up_msg_handler, |_| {}).await
}
