fn main() {
    ui::start();
}
