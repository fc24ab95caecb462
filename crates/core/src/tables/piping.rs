/// Pipe account descriptions produced by the pipe classifier, mapped to account codes.
pub const PIPING_ACCOUNTS: &[(&str, &str)] = &[
    ("Above Ground Small Bore Pipe (All-In) (0-2\")", "72.46.02"),
    ("Above Ground Small Bore Pipe (All-In) (CS)", "72.46.02.02"),
    ("Above Ground Small Bore Pipe (All-In) (SS)", "72.46.02.04"),
    ("Above Ground Small Bore Pipe (All-In) (Alloy)", "72.46.02.06"),
    ("Above Ground Small Bore Pipe (All-In) (PVC)", "72.46.02.08"),
    ("Above Ground Small Bore Pipe (All-In) (CPVC)", "72.46.02.10"),
    ("Above Ground Small Bore Pipe (All-In) (HDPE)", "72.46.02.12"),
    ("Above Ground Large Bore Pipe", "72.46.04"),
    ("Above Ground Large Bore Pipe (CS) (2.5\"-6\" Diameter)", "72.46.04.02.005"),
    ("Above Ground Large Bore Pipe (CS) (8\"-12\" Diameter)", "72.46.04.02.010"),
    ("Above Ground Large Bore Pipe (CS) (14\"-24\" Diameter)", "72.46.04.02.015"),
    ("Above Ground Large Bore Pipe (CS) (26\"-40\" Diameter)", "72.46.04.02.020"),
    ("Above Ground Large Bore Pipe (CS) (42\"-54\" Diameter)", "72.46.04.02.025"),
    ("Above Ground Large Bore Pipe (CS) (60\"-72\" Diameter)", "72.46.04.02.030"),
    ("Above Ground Large Bore Pipe (CS) (74\"-90\" Diameter)", "72.46.04.02.035"),
    ("Above Ground Large Bore Pipe (CS) (>90\" Diameter)", "72.46.04.02.040"),
    ("Above Ground Large Bore Pipe (SS) (2.5\"-6\" Diameter)", "72.46.04.04.005"),
    ("Above Ground Large Bore Pipe (SS) (8\"-12\" Diameter)", "72.46.04.04.010"),
    ("Above Ground Large Bore Pipe (SS) (14\"-24\" Diameter)", "72.46.04.04.015"),
    ("Above Ground Large Bore Pipe (SS) (26\"-40\" Diameter)", "72.46.04.04.020"),
    ("Above Ground Large Bore Pipe (SS) (42\"-54\" Diameter)", "72.46.04.04.025"),
    ("Above Ground Large Bore Pipe (SS) (60\"-72\" Diameter)", "72.46.04.04.030"),
    ("Above Ground Large Bore Pipe (SS) (74\"-90\" Diameter)", "72.46.04.04.035"),
    ("Above Ground Large Bore Pipe (SS) (>90\" Diameter)", "72.46.04.04.040"),
    ("Above Ground Large Bore Pipe (Alloy) (2.5\"-6\" Diameter)", "72.46.04.06.005"),
    ("Above Ground Large Bore Pipe (Alloy) (8\"-12\" Diameter)", "72.46.04.06.010"),
    ("Above Ground Large Bore Pipe (Alloy) (14\"-24\" Diameter)", "72.46.04.06.015"),
    ("Above Ground Large Bore Pipe (Alloy) (26\"-40\" Diameter)", "72.46.04.06.020"),
    ("Above Ground Large Bore Pipe (Alloy) (42\"-54\" Diameter)", "72.46.04.06.025"),
    ("Above Ground Large Bore Pipe (Alloy) (60\"-72\" Diameter)", "72.46.04.06.030"),
    ("Above Ground Large Bore Pipe (Alloy) (74\"-90\" Diameter)", "72.46.04.06.035"),
    ("Above Ground Large Bore Pipe (Alloy) (>90\" Diameter)", "72.46.04.06.040"),
    ("Above Ground Large Bore Pipe (PVC) (2.5\"-6\" Diameter)", "72.46.04.08.005"),
    ("Above Ground Large Bore Pipe (PVC) (8\"-12\" Diameter)", "72.46.04.08.010"),
    ("Above Ground Large Bore Pipe (PVC) (14\"-24\" Diameter)", "72.46.04.08.015"),
    ("Above Ground Large Bore Pipe (PVC) (26\"-40\" Diameter)", "72.46.04.08.020"),
    ("Above Ground Large Bore Pipe (PVC) (42\"-54\" Diameter)", "72.46.04.08.025"),
    ("Above Ground Large Bore Pipe (PVC) (60\"-72\" Diameter)", "72.46.04.08.030"),
    ("Above Ground Large Bore Pipe (PVC) (74\"-90\" Diameter)", "72.46.04.08.035"),
    ("Above Ground Large Bore Pipe (PVC) (>90\" Diameter)", "72.46.04.08.040"),
    ("Above Ground Large Bore Pipe (CPVC) (2.5\"-6\" Diameter)", "72.46.04.10.005"),
    ("Above Ground Large Bore Pipe (CPVC) (8\"-12\" Diameter)", "72.46.04.10.010"),
    ("Above Ground Large Bore Pipe (CPVC) (14\"-24\" Diameter)", "72.46.04.10.015"),
    ("Above Ground Large Bore Pipe (CPVC) (26\"-40\" Diameter)", "72.46.04.10.020"),
    ("Above Ground Large Bore Pipe (CPVC) (42\"-54\" Diameter)", "72.46.04.10.025"),
    ("Above Ground Large Bore Pipe (CPVC) (60\"-72\" Diameter)", "72.46.04.10.030"),
    ("Above Ground Large Bore Pipe (CPVC) (74\"-90\" Diameter)", "72.46.04.10.035"),
    ("Above Ground Large Bore Pipe (CPVC) (>90\" Diameter)", "72.46.04.10.040"),
    ("Above Ground Large Bore Pipe (HDPE) (2.5\"-6\" Diameter)", "72.46.04.12.005"),
    ("Above Ground Large Bore Pipe (HDPE) (8\"-12\" Diameter)", "72.46.04.12.010"),
    ("Above Ground Large Bore Pipe (HDPE) (14\"-24\" Diameter)", "72.46.04.12.015"),
    ("Above Ground Large Bore Pipe (HDPE) (26\"-40\" Diameter)", "72.46.04.12.020"),
    ("Above Ground Large Bore Pipe (HDPE) (42\"-54\" Diameter)", "72.46.04.12.025"),
    ("Above Ground Large Bore Pipe (HDPE) (60\"-72\" Diameter)", "72.46.04.12.030"),
    ("Above Ground Large Bore Pipe (HDPE) (74\"-90\" Diameter)", "72.46.04.12.035"),
    ("Above Ground Large Bore Pipe (HDPE) (>90\" Diameter)", "72.46.04.12.040"),
    ("Underground Small Bore Pipe", "72.43.02"),
    ("Underground Small Bore Pipe - CS", "72.43.02.02"),
    ("Underground Small Bore Pipe - SS", "72.43.02.04"),
    ("Underground Small Bore Pipe - Alloy", "72.43.02.06"),
    ("Underground Small Bore Pipe - PVC", "72.43.02.08"),
    ("Underground Small Bore Pipe - CPVC", "72.43.02.10"),
    ("Underground Small Bore Pipe - HDPE", "72.43.02.12"),
    ("Underground Large Bore Pipe", "72.43.04"),
    ("Underground Large Bore Pipe (CS) (2.5\"-6\" Diameter)", "72.43.04.02.005"),
    ("Underground Large Bore Pipe (CS) (8\"-12\" Diameter)", "72.43.04.02.010"),
    ("Underground Large Bore Pipe (CS) (14\"-24\" Diameter)", "72.43.04.02.015"),
    ("Underground Large Bore Pipe (CS) (26\"-40\" Diameter)", "72.43.04.02.020"),
    ("Underground Large Bore Pipe (CS) (42\"-54\" Diameter)", "72.43.04.02.025"),
    ("Underground Large Bore Pipe (CS) (60\"-72\" Diameter)", "72.43.04.02.030"),
    ("Underground Large Bore Pipe (CS) (74\"-90\" Diameter)", "72.43.04.02.035"),
    ("Underground Large Bore Pipe (CS) (>90\" Diameter)", "72.43.04.02.040"),
    ("Underground Large Bore Pipe (SS) (2.5\"-6\" Diameter)", "72.43.04.04.005"),
    ("Underground Large Bore Pipe (SS) (8\"-12\" Diameter)", "72.43.04.04.010"),
    ("Underground Large Bore Pipe (SS) (14\"-24\" Diameter)", "72.43.04.04.015"),
    ("Underground Large Bore Pipe (SS) (26\"-40\" Diameter)", "72.43.04.04.020"),
    ("Underground Large Bore Pipe (SS) (42\"-54\" Diameter)", "72.43.04.04.025"),
    ("Underground Large Bore Pipe (SS) (60\"-72\" Diameter)", "72.43.04.04.030"),
    ("Underground Large Bore Pipe (SS) (74\"-90\" Diameter)", "72.43.04.04.035"),
    ("Underground Large Bore Pipe (SS) (>90\" Diameter)", "72.43.04.04.040"),
    ("Underground Large Bore Pipe (Alloy) (2.5\"-6\" Diameter)", "72.43.04.06.005"),
    ("Underground Large Bore Pipe (Alloy) (8\"-12\" Diameter)", "72.43.04.06.010"),
    ("Underground Large Bore Pipe (Alloy) (14\"-24\" Diameter)", "72.43.04.06.015"),
    ("Underground Large Bore Pipe (Alloy) (26\"-40\" Diameter)", "72.43.04.06.020"),
    ("Underground Large Bore Pipe (Alloy) (42\"-54\" Diameter)", "72.43.04.06.025"),
    ("Underground Large Bore Pipe (Alloy) (60\"-72\" Diameter)", "72.43.04.06.030"),
    ("Underground Large Bore Pipe (Alloy) (74\"-90\" Diameter)", "72.43.04.06.035"),
    ("Underground Large Bore Pipe (Alloy) (>90\" Diameter)", "72.43.04.06.040"),
    ("Underground Large Bore Pipe (PVC) (2.5\"-6\" Diameter)", "72.43.04.08.005"),
    ("Underground Large Bore Pipe (PVC) (8\"-12\" Diameter)", "72.43.04.08.010"),
    ("Underground Large Bore Pipe (PVC) (14\"-24\" Diameter)", "72.43.04.08.015"),
    ("Underground Large Bore Pipe (PVC) (26\"-40\" Diameter)", "72.43.04.08.020"),
    ("Underground Large Bore Pipe (PVC) (42\"-54\" Diameter)", "72.43.04.08.025"),
    ("Underground Large Bore Pipe (PVC) (60\"-72\" Diameter)", "72.43.04.08.030"),
    ("Underground Large Bore Pipe (PVC) (74\"-90\" Diameter)", "72.43.04.08.035"),
    ("Underground Large Bore Pipe (PVC) (>90\" Diameter)", "72.43.04.08.040"),
    ("Underground Large Bore Pipe (CPVC) (2.5\"-6\" Diameter)", "72.43.04.10.005"),
    ("Underground Large Bore Pipe (CPVC) (8\"-12\" Diameter)", "72.43.04.10.010"),
    ("Underground Large Bore Pipe (CPVC) (14\"-24\" Diameter)", "72.43.04.10.015"),
    ("Underground Large Bore Pipe (CPVC) (26\"-40\" Diameter)", "72.43.04.10.020"),
    ("Underground Large Bore Pipe (CPVC) (42\"-54\" Diameter)", "72.43.04.10.025"),
    ("Underground Large Bore Pipe (CPVC) (60\"-72\" Diameter)", "72.43.04.10.030"),
    ("Underground Large Bore Pipe (CPVC) (74\"-90\" Diameter)", "72.43.04.10.035"),
    ("Underground Large Bore Pipe (CPVC) (>90\" Diameter)", "72.43.04.10.040"),
    ("Underground Large Bore Pipe (HDPE) (2.5\"-6\" Diameter)", "72.43.04.12.005"),
    ("Underground Large Bore Pipe (HDPE) (8\"-12\" Diameter)", "72.43.04.12.010"),
    ("Underground Large Bore Pipe (HDPE) (14\"-24\" Diameter)", "72.43.04.12.015"),
    ("Underground Large Bore Pipe (HDPE) (26\"-40\" Diameter)", "72.43.04.12.020"),
    ("Underground Large Bore Pipe (HDPE) (42\"-54\" Diameter)", "72.43.04.12.025"),
    ("Underground Large Bore Pipe (HDPE) (60\"-72\" Diameter)", "72.43.04.12.030"),
    ("Underground Large Bore Pipe (HDPE) (74\"-90\" Diameter)", "72.43.04.12.035"),
    ("Underground Large Bore Pipe (HDPE) (>90\" Diameter)", "72.43.04.12.040"),
];
