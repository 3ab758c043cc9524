/// Whatever opened the order screen. The screen only ever asks to go back.
pub trait Navigator: Send + Sync {
    fn go_back(&self);
}
