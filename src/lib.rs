pub mod configuration;

pub mod manager {
    pub mod namedobject;
    pub mod managererror;
    pub mod manager;
}

pub mod math {
    pub mod curve {
        pub mod curve;
        pub mod nonparametriccurve {
            pub mod nonparametriccurve;
        }
    }

    pub mod lookuptable {
        pub mod tablevalue;
        pub mod lookuptableerror;
        pub mod branchlesssearch;
        pub mod interpolation;
        pub mod interpolatingtable;
        pub mod dynamicinterpolatingtable;
    }
}
