use message_viewer::App;

fn main() {
    yew::Renderer::<App>::new().render();
}
