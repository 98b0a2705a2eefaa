use common::gateway::GatewayError;
use common::model::Person;
use serde_json::Value;

pub enum Msg {
    // Menu options
    Home,
    About,
    ListAll,

    // Actions dispatched from links inside the rendered HTML
    ShowOne(String),
    Previous,
    Next,
    Edit,
    Cancel,
    Save,

    // Gateway responses
    HomeLoaded(Value),
    AboutLoaded(Value),
    ManyLoaded(Vec<Person>),
    OneLoaded(Person),
    Failed(GatewayError),
}
