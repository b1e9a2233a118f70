fn main() {
    cashdesk_frontend::start();
}
